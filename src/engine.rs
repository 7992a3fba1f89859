use rayon::prelude::*;
use tracing::trace;

use crate::error::PaletteError;
use crate::math::color_parse::normalize;
use crate::math::resolver::{resolve_normalized, DEFAULT_BLEND};
use crate::math::HueScale;
use crate::types::{BubbleStyle, ColorEntry, ResolveOptions};

/// Work out text colors for every color the bubble page shows.
///
/// The blend is parsed once and shared; each entry is resolved on Rayon's
/// pool. Output order matches input order. The background is passed through
/// exactly as stored, so the UI keeps rendering what the user typed.
pub fn style_palette(entries: &[ColorEntry], options: &ResolveOptions) -> Vec<BubbleStyle> {
    let hue_scale = HueScale::from_option(options.hue_scale.as_deref());
    let blend = normalize(options.blend.as_deref().unwrap_or(DEFAULT_BLEND), hue_scale);
    trace!(entries = entries.len(), "styling palette");

    entries
        .par_iter()
        .map(|entry| {
            let background = normalize(&entry.code.hex, hue_scale);
            let resolution = resolve_normalized(&background, &blend);
            BubbleStyle {
                id: entry.id,
                name: entry.color.clone(),
                background_color: entry.code.hex.clone(),
                color: resolution.decision.as_hex().to_string(),
            }
        })
        .collect()
}

/// Decode the `/colors` response body.
pub fn parse_colors_json(json: &str) -> Result<Vec<ColorEntry>, PaletteError> {
    Ok(serde_json::from_str(json)?)
}
