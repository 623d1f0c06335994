//! Reconciler error types

use thiserror::Error;

/// Errors that can occur while reconciling a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// Submitted input is missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),
}
