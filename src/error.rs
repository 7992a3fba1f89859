use thiserror::Error;

/// Reasons a color string could not be read by the strict parser.
///
/// None of these reach a caller of the resolver: `normalize` turns every one
/// of them into the opaque-white fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidHexLength(usize),
    #[error("invalid hex digit in {0:?}")]
    InvalidHexDigit(String),
    #[error("malformed color function {0:?}")]
    InvalidFunction(String),
    #[error("invalid numeric component {0:?}")]
    InvalidNumber(String),
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid colors payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<PaletteError> for napi::Error {
    fn from(err: PaletteError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}
