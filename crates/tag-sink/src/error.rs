//! Error types for tag sinks.

use thiserror::Error;

/// Errors a sink can raise while a stream is being written.
///
/// The exporter never handles these; they reach the caller unchanged.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("End tag written with no open tag")]
    UnbalancedEndTag,

    #[error("Content written outside of any tag")]
    ContentOutsideTag,

    #[error("Stream finished with {depth} unclosed tag(s)")]
    UnclosedTags { depth: usize },

    #[error("Sink error: {0}")]
    Other(String),
}

/// Result type alias for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;
