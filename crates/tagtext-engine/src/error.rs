use thiserror::Error;

/// Failure reported by a tag handler, or by the parser on a handler's behalf.
///
/// Never surfaced to parse callers: the parser logs it and drops the tag.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("<{tag}> is missing argument {index}")]
    MissingArgument { tag: String, index: usize },

    #[error("<{tag}> has invalid argument `{value}`: {reason}")]
    InvalidArgument {
        tag: String,
        value: String,
        reason: &'static str,
    },

    #[error("invalid style: {0}")]
    InvalidStyle(#[source] serde_json::Error),

    #[error("invalid raw node: {0}")]
    InvalidRaw(#[source] serde_json::Error),

    #[error("<{tag}> reported {consumed} consumed bytes but only {available} are available")]
    LengthOutOfBounds {
        tag: String,
        consumed: usize,
        available: usize,
    },
}
