//! Error types for the message joiner.

use crate::framework::SinkError;
use thiserror::Error;

/// Errors that can occur while logging joined messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum JoinerError {
    /// The sink failed to accept the joined text.
    #[error("Sink write failed: {0}")]
    Sink(#[from] SinkError),
}
