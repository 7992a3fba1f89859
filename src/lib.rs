#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod math;
pub mod types;

use math::HueScale;
use types::{BubbleStyle, ColorEntry, ForegroundResult, NormalizedColorJs, ResolveOptions};

#[napi]
pub fn health_check() -> String {
    "bubbles-contrast-native ok".to_string()
}

/// Text color ("#000000" or "#ffffff") for a background color.
/// `blend` defaults to white.
#[napi]
pub fn resolve_foreground(color: String, blend: Option<String>) -> String {
    math::resolve_foreground(&color, blend.as_deref())
        .as_hex()
        .to_string()
}

#[napi]
pub fn resolve_foreground_with(color: String, options: Option<ResolveOptions>) -> ForegroundResult {
    let options = options.unwrap_or_default();
    let hue_scale = HueScale::from_option(options.hue_scale.as_deref());
    math::resolve(&color, options.blend.as_deref(), hue_scale).into()
}

#[napi]
pub fn normalize_color(color: String, hue_scale: Option<String>) -> NormalizedColorJs {
    math::color_parse::normalize(&color, HueScale::from_option(hue_scale.as_deref())).into()
}

#[napi]
pub fn style_palette(entries: Vec<ColorEntry>, options: Option<ResolveOptions>) -> Vec<BubbleStyle> {
    engine::style_palette(&entries, &options.unwrap_or_default())
}

/// Same as `stylePalette`, straight from a `/colors` response body.
#[napi]
pub fn style_palette_json(json: String, options: Option<ResolveOptions>) -> napi::Result<Vec<BubbleStyle>> {
    let entries = engine::parse_colors_json(&json)?;
    Ok(engine::style_palette(&entries, &options.unwrap_or_default()))
}
