//! Error types for order list transitions.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Reasons a strict transition did not change the list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order in the list carries the requested id.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The requested state has no defined transition.
    #[error("Unsupported target state: {0}")]
    UnsupportedState(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Rejected(state) => OrderError::UnsupportedState(state),
        }
    }
}
