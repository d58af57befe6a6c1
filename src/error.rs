//! Error types for news-extract.
//!
//! Only conditions a caller must act on are errors. A field that no
//! strategy could fill, a language the detector could not name, or an
//! extracted record without a gold counterpart are ordinary values.

/// Error type for extraction, evaluation and corpus operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document has no usable HTML (empty or whitespace-only).
    #[error("malformed input for {url}: {reason}")]
    MalformedInput {
        /// URL of the offending document.
        url: String,
        /// Why the document was rejected.
        reason: String,
    },

    /// A configuration value is outside its valid range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A batch run was cancelled before every document was processed.
    #[error("batch cancelled after {completed} of {total} documents")]
    Cancelled {
        /// Documents finished before cancellation was observed.
        completed: usize,
        /// Documents submitted to the batch.
        total: usize,
    },

    /// The batch worker pool could not be started.
    #[error("worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// Reading or writing a corpus file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus or report could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for news-extract operations.
pub type Result<T> = std::result::Result<T, Error>;
