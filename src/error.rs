use alloc::string::String;
use enough::StopReason;

/// Errors from scalar codecs and bitmap container transcoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("value {value} does not fit in {target}")]
    ValueOutOfRange { value: String, target: &'static str },

    #[error("malformed DIB header: {0}")]
    MalformedHeader(String),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for CodecError {
    fn from(r: StopReason) -> Self {
        CodecError::Cancelled(r)
    }
}

impl CodecError {
    pub(crate) fn out_of_range(value: impl core::fmt::Display, target: &'static str) -> Self {
        CodecError::ValueOutOfRange {
            value: alloc::format!("{value}"),
            target,
        }
    }
}
