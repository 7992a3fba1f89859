pub mod brightness;
pub mod color;
pub mod color_parse;
pub mod composite;
pub mod hex;
pub mod hsl;
pub mod resolver;
pub mod wcag;

pub use color::{ForegroundDecision, NormalizedColor};
pub use hsl::HueScale;
pub use resolver::{resolve, resolve_foreground, Resolution};
