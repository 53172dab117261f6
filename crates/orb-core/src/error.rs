use thiserror::Error;

/// Rejection of a parameter write. The store keeps its previous value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
    #[error("parameter `{0}` is already defined")]
    DuplicateParameter(String),
    #[error("parameter `{name}` expects a {expected} value")]
    KindMismatch { name: String, expected: &'static str },
    #[error("parameter `{name}` must be a finite number")]
    NotFinite { name: String },
    #[error("parameter `{name}` value {value} outside [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("parameter `{name}` does not accept `{value}`")]
    NotAChoice { name: String, value: String },
    #[error("parameter `{name}`: {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ColorParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("malformed hex color `{0}`")]
    BadHex(String),
    #[error("malformed color function `{0}`")]
    BadFunction(String),
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene variant `{0}` (expected showcase, reactive or studio)")]
pub struct VariantParseError(pub String);
