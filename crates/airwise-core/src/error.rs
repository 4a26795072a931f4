//! Error types shared across the airwise crates.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the airwise crates.
///
/// A missing snapshot is not listed here: the assistant answers it with an
/// apology message instead of failing.
#[derive(Error, Debug)]
pub enum Error {
    /// Submitted text was empty after trimming
    #[error("message is empty")]
    EmptyInput,

    /// A message was submitted while the previous reply was still composing
    #[error("assistant is still composing the previous reply")]
    ConcurrentSubmission,

    /// No async runtime to schedule the deferred reply on
    #[error("no async runtime available to compose the reply")]
    NoRuntime,

    /// Reading outside its physical domain
    #[error("invalid reading: {0}")]
    InvalidReading(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
