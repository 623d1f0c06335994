//! Provider error types

use crate::config::ConfigError;
use lazy_reconciler::ReconcileError;
use thiserror::Error;

/// Errors that can occur while serving host requests
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Submitted input is unusable, or a host buffer could not be read or written
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The host asked for a resource type this provider does not serve
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),
}

impl From<ReconcileError> for ProviderError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::Validation(msg) => ProviderError::Validation(msg),
        }
    }
}

impl ProviderError {
    /// Wrap a host buffer failure
    pub(crate) fn buffer<E: std::fmt::Display>(action: &str, err: E) -> Self {
        ProviderError::Validation(format!("failed to {}: {}", action, err))
    }
}
