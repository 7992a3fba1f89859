use std::fmt;

use serde::Serialize;

/// A color reduced to 8-bit RGB channels plus a 0.0-1.0 alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl NormalizedColor {
    /// Opaque white. Every unreadable color string normalizes to this.
    pub const FALLBACK: NormalizedColor = NormalizedColor::opaque(255, 255, 255);

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        NormalizedColor {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color carries transparency.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            let a = (self.alpha * 255.0).round() as u8;
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, a
            )
        }
    }
}

/// Which of the two text colors reads better on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForegroundDecision {
    Black,
    White,
}

impl ForegroundDecision {
    pub fn as_hex(&self) -> &'static str {
        match self {
            ForegroundDecision::Black => "#000000",
            ForegroundDecision::White => "#ffffff",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ForegroundDecision::Black => "black",
            ForegroundDecision::White => "white",
        }
    }

    pub fn as_color(&self) -> NormalizedColor {
        match self {
            ForegroundDecision::Black => NormalizedColor::opaque(0, 0, 0),
            ForegroundDecision::White => NormalizedColor::FALLBACK,
        }
    }
}

impl fmt::Display for ForegroundDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
