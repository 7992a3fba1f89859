use serde::Serialize;

use super::brightness::{decide, perceived_brightness};
use super::color::{ForegroundDecision, NormalizedColor};
use super::color_parse::normalize;
use super::composite::{composite_over, to_opaque};
use super::hsl::HueScale;
use super::wcag::contrast_ratio;

/// Backdrop assumed when the caller does not name one: a plain white page.
pub const DEFAULT_BLEND: &str = "#ffffff";

/// Everything worked out while picking a foreground for one background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    pub decision: ForegroundDecision,
    /// AERT brightness of the composited background, 0-255.
    pub brightness: u32,
    /// The background after transparency was flattened onto the blend.
    pub composited: NormalizedColor,
    /// WCAG contrast of the chosen foreground against `composited`.
    /// Reported only; it never changes the decision.
    pub contrast_ratio: f64,
}

/// Pick black or white text for a background color.
///
/// `blend` is what a translucent `color` is composited against and defaults
/// to opaque white. Never fails: unreadable input on either side is treated
/// as opaque white, so garbage in yields black text.
pub fn resolve_foreground(color: &str, blend: Option<&str>) -> ForegroundDecision {
    resolve(color, blend, HueScale::default()).decision
}

pub fn resolve(color: &str, blend: Option<&str>, hue_scale: HueScale) -> Resolution {
    let color = normalize(color, hue_scale);
    let blend = normalize(blend.unwrap_or(DEFAULT_BLEND), hue_scale);
    resolve_normalized(&color, &blend)
}

pub fn resolve_normalized(color: &NormalizedColor, blend: &NormalizedColor) -> Resolution {
    let effective = composite_over(color, blend);
    let brightness = perceived_brightness(effective);
    let decision = decide(brightness);
    let text = decision.as_color();

    Resolution {
        decision,
        brightness,
        composited: to_opaque(effective),
        contrast_ratio: contrast_ratio(text.channels().map(f64::from), effective),
    }
}
