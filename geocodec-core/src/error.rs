use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoCodecError {
    #[error("{message} at position {position}: '{context}'")]
    Format {
        message: &'static str,
        position: usize,
        context: String,
    },

    #[error("GeometryType {0} not supported")]
    UnsupportedType(String),

    #[error("index out of range: {needed} bytes at offset {offset} (len {len})")]
    Bounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("geometry nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeoCodecError {
    pub(crate) fn unsupported(code: impl std::fmt::Display) -> Self {
        GeoCodecError::UnsupportedType(code.to_string())
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GeoCodecError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GeoCodecError>;
