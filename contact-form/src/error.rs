//! Error types for the contact form crate.
//!
//! Validation failures are not errors; they are reported through
//! [`ValidationErrors`](crate::validation::ValidationErrors).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("line {line}: {reason}")]
    Script { line: usize, reason: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
