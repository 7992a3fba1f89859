use csscolorparser::Color;
use tracing::debug;

use super::color::NormalizedColor;
use super::hex::parse_hex_digits;
use super::hsl::{hsl_to_rgb, HueScale};
use crate::error::ColorParseError;

/// Parse a CSS color string into normalized channels.
/// Handles: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
/// `hsl()`, `hsla()` and named colors. Input is trimmed and case-folded first.
pub fn parse_color(spec: &str, hue_scale: HueScale) -> Result<NormalizedColor, ColorParseError> {
    let trimmed = spec.trim().to_ascii_lowercase();

    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(raw) = trimmed.strip_prefix('#') {
        return parse_hex_digits(raw);
    }

    // rgb before hsl: the functions are told apart by substring, not prefix
    if trimmed.contains("rgb") {
        return parse_rgb_function(&trimmed);
    }
    if trimmed.contains("hsl") {
        return parse_hsl_function(&trimmed, hue_scale);
    }

    parse_named(&trimmed)
}

/// Total version of [`parse_color`]: anything unreadable becomes opaque white.
pub fn normalize(spec: &str, hue_scale: HueScale) -> NormalizedColor {
    match parse_color(spec, hue_scale) {
        Ok(color) => color,
        Err(error) => {
            debug!(input = spec, %error, "unreadable color, using opaque white");
            NormalizedColor::FALLBACK
        }
    }
}

fn parse_rgb_function(spec: &str) -> Result<NormalizedColor, ColorParseError> {
    let args = function_args(spec)?;
    Ok(NormalizedColor {
        red: channel(args[0])?,
        green: channel(args[1])?,
        blue: channel(args[2])?,
        alpha: alpha(args.get(3).copied())?,
    })
}

fn parse_hsl_function(spec: &str, hue_scale: HueScale) -> Result<NormalizedColor, ColorParseError> {
    let args = function_args(spec)?;
    let h = number(args[0])? / hue_scale.divisor();
    let s = percentage(args[1])?;
    let l = percentage(args[2])?;
    let [red, green, blue] = hsl_to_rgb(h, s, l);
    Ok(NormalizedColor {
        red,
        green,
        blue,
        alpha: alpha(args.get(3).copied())?,
    })
}

/// Split `name(a, b, c[, d])` into its 3 or 4 comma-separated arguments.
fn function_args(spec: &str) -> Result<Vec<&str>, ColorParseError> {
    let malformed = || ColorParseError::InvalidFunction(spec.to_string());

    let (_, inner) = spec.split_once('(').ok_or_else(malformed)?;
    let inner = inner.trim_end().trim_end_matches(')');
    let args: Vec<&str> = inner.split(',').map(str::trim).collect();

    if !(3..=4).contains(&args.len()) {
        return Err(malformed());
    }
    Ok(args)
}

fn number(arg: &str) -> Result<f64, ColorParseError> {
    match arg.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ColorParseError::InvalidNumber(arg.to_string())),
    }
}

fn channel(arg: &str) -> Result<u8, ColorParseError> {
    Ok(number(arg)?.round().clamp(0.0, 255.0) as u8)
}

/// `50%` or `50` both read as 0.5.
fn percentage(arg: &str) -> Result<f64, ColorParseError> {
    let digits = arg.strip_suffix('%').unwrap_or(arg).trim_end();
    Ok(number(digits)? / 100.0)
}

fn alpha(arg: Option<&str>) -> Result<f64, ColorParseError> {
    match arg {
        Some(a) => Ok(number(a)?.clamp(0.0, 1.0)),
        None => Ok(1.0),
    }
}

fn parse_named(name: &str) -> Result<NormalizedColor, ColorParseError> {
    let unknown = || ColorParseError::UnknownName(name.to_string());

    if !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(unknown());
    }
    // csscolorparser reads bare hex like "bad" or "cafe"; no CSS name is
    // made only of a-f, so those are never names.
    if name.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(unknown());
    }

    let color = name.parse::<Color>().map_err(|_| unknown())?;
    let [r, g, b, a] = color.to_rgba8();
    Ok(NormalizedColor {
        red: r,
        green: g,
        blue: b,
        alpha: a as f64 / 255.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(spec: &str) -> Result<NormalizedColor, ColorParseError> {
        parse_color(spec, HueScale::Percent)
    }

    #[test]
    fn hex_forms() {
        assert_eq!(parse("#ff0000").unwrap(), NormalizedColor::opaque(255, 0, 0));
        assert_eq!(parse("#f00").unwrap(), NormalizedColor::opaque(240, 0, 0));
        assert_eq!(parse("  #1E293B ").unwrap(), NormalizedColor::opaque(30, 41, 59));
        assert_eq!(parse("#f008").unwrap().alpha, 0.5);
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(
            parse("rgb(255, 0, 128)").unwrap(),
            NormalizedColor::opaque(255, 0, 128)
        );
    }

    #[test]
    fn rgba_carries_alpha() {
        let c = parse("rgba(0,0,0,0.5)").unwrap();
        assert_eq!(c.channels(), [0, 0, 0]);
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn rgb_rounds_and_clamps() {
        let c = parse("rgba(300, -20, 12.6, 7)").unwrap();
        assert_eq!(c, NormalizedColor::opaque(255, 0, 13));
    }

    #[test]
    fn rgb_uppercase_accepted() {
        assert_eq!(parse("RGB(1, 2, 3)").unwrap(), NormalizedColor::opaque(1, 2, 3));
    }

    #[test]
    fn rgb_missing_args_rejected() {
        assert!(matches!(
            parse("rgb(1, 2)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(
            parse("rgba(1, 2, 3, 4, 5)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(parse("rgb 1 2 3"), Err(ColorParseError::InvalidFunction(_))));
    }

    #[test]
    fn rgb_space_format_rejected() {
        // only the comma syntax is part of the grammar
        assert!(parse("rgb(255 0 0)").is_err());
    }

    #[test]
    fn non_numeric_component_rejected() {
        assert_eq!(
            parse("rgb(255, zero, 0)"),
            Err(ColorParseError::InvalidNumber("zero".to_string()))
        );
        assert!(parse("rgb(nan, 0, 0)").is_err());
        assert!(parse("rgb(inf, 0, 0)").is_err());
    }

    #[test]
    fn hsl_red() {
        assert_eq!(parse("hsl(0, 100%, 50%)").unwrap(), NormalizedColor::opaque(255, 0, 0));
    }

    #[test]
    fn hsl_hue_on_percent_scale() {
        // 33.333 / 100 is a third of the wheel: green
        let c = parse("hsl(33.3333333, 100%, 50%)").unwrap();
        assert_eq!(c.channels(), [0, 255, 0]);
        // 120 / 100 wraps past the end of the wheel instead
        let c = parse("hsl(120, 100%, 50%)").unwrap();
        assert_eq!(c.channels(), [204, 255, 0]);
    }

    #[test]
    fn hsl_hue_on_degree_scale() {
        let c = parse_color("hsl(120, 100%, 50%)", HueScale::Degrees).unwrap();
        assert_eq!(c.channels(), [0, 255, 0]);
        let c = parse_color("hsla(240, 100%, 50%, 0.25)", HueScale::Degrees).unwrap();
        assert_eq!(c.channels(), [0, 0, 255]);
        assert_eq!(c.alpha, 0.25);
    }

    #[test]
    fn named_color() {
        assert_eq!(parse("red").unwrap(), NormalizedColor::opaque(255, 0, 0));
        assert_eq!(
            parse("CornflowerBlue").unwrap(),
            NormalizedColor::opaque(100, 149, 237)
        );
        assert_eq!(parse("black").unwrap(), NormalizedColor::opaque(0, 0, 0));
    }

    #[test]
    fn transparent_is_clear_black() {
        let c = parse("transparent").unwrap();
        assert_eq!(c.channels(), [0, 0, 0]);
        assert_eq!(c.alpha, 0.0);
    }

    #[test]
    fn unknown_names_rejected() {
        assert!(matches!(parse("not-a-color"), Err(ColorParseError::UnknownName(_))));
        assert!(matches!(parse("currentcolor"), Err(ColorParseError::UnknownName(_))));
        assert!(matches!(parse("cafe"), Err(ColorParseError::UnknownName(_))));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(parse("   "), Err(ColorParseError::Empty));
    }

    #[test]
    fn normalize_falls_back_to_white() {
        assert_eq!(normalize("not-a-color", HueScale::Percent), NormalizedColor::FALLBACK);
        assert_eq!(normalize("#12", HueScale::Percent), NormalizedColor::FALLBACK);
        assert_eq!(normalize("", HueScale::Percent), NormalizedColor::FALLBACK);
    }
}
