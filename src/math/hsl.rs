use std::str::FromStr;

/// How the hue argument of `hsl()` is normalized before conversion.
///
/// `Percent` divides the hue by 100. This is the behavior the bubbles UI has
/// always shipped with, so it stays the default even though a hue of 120
/// does not come out green. `Degrees` divides by 360 as CSS intends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueScale {
    #[default]
    Percent,
    Degrees,
}

impl HueScale {
    pub fn divisor(&self) -> f64 {
        match self {
            HueScale::Percent => 100.0,
            HueScale::Degrees => 360.0,
        }
    }

    /// Read an option string coming from JS. Anything unrecognized keeps the
    /// default scale.
    pub fn from_option(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for HueScale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percent" => Ok(HueScale::Percent),
            "degrees" | "deg" => Ok(HueScale::Degrees),
            _ => Err(()),
        }
    }
}

/// Convert normalized hue, saturation and lightness to 8-bit RGB.
///
/// Saturation and lightness are clamped to 0.0-1.0. The hue is wrapped once
/// into range (not modulo), matching the usual `hue2rgb` helper, so results
/// for hues far outside 0.0-1.0 are clamped per channel.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_byte(l);
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_byte(hue_to_channel(p, q, h)),
        to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    ]
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
