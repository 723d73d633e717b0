use thiserror::Error;

/// Convenience result type for fallible operations in this crate.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by record decoding and fallible reductions.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Underlying JSON parse error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed but does not decode into records (non-object rows,
    /// unsupported top-level shapes, empty input).
    #[error("decode error: {message}")]
    Decode { message: String },

    /// An operation that needs at least one element was given an empty collection.
    #[error("{operation} requires a non-empty collection")]
    EmptyCollection { operation: &'static str },
}
