use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::math::{NormalizedColor, Resolution};

/// Per-call configuration passed from JS to Rust
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Backdrop for translucent colors. Defaults to "#ffffff".
    pub blend: Option<String>,
    /// "percent" (default) | "degrees"
    pub hue_scale: Option<String>,
}

/// NormalizedColor as seen from JS (NAPI has no u8)
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedColorJs {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: f64,
}

impl From<NormalizedColor> for NormalizedColorJs {
    fn from(c: NormalizedColor) -> Self {
        NormalizedColorJs {
            red: c.red.into(),
            green: c.green.into(),
            blue: c.blue.into(),
            alpha: c.alpha,
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ForegroundResult {
    /// "#000000" | "#ffffff"
    pub foreground: String,
    /// "black" | "white"
    pub decision: String,
    pub brightness: u32,
    pub composited_hex: String,
    /// Rounded to 2 decimals
    pub contrast_ratio: f64,
}

impl From<Resolution> for ForegroundResult {
    fn from(r: Resolution) -> Self {
        ForegroundResult {
            foreground: r.decision.as_hex().to_string(),
            decision: r.decision.as_str().to_string(),
            brightness: r.brightness,
            composited_hex: r.composited.to_hex(),
            contrast_ratio: (r.contrast_ratio * 100.0).round() / 100.0,
        }
    }
}

/// One record of the `/colors` API
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorEntry {
    pub id: Option<u32>,
    pub color: String,
    pub code: ColorCode,
}

#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorCode {
    pub hex: String,
}

/// Inline style for one bubble / legend
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleStyle {
    pub id: Option<u32>,
    pub name: String,
    pub background_color: String,
    pub color: String,
}
