//! Error types for the ringcrush engine.

use crate::processor::LifecycleState;
use thiserror::Error;

/// Errors raised by [`Processor`](crate::Processor) outside the sample loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// `process_block` was called before `configure` or after `release`.
    #[error("processor is not configured (state: {state:?})")]
    NotConfigured {
        /// State the processor was in.
        state: LifecycleState,
    },

    /// `configure` was given a stream setup the chain cannot run with.
    #[error("invalid stream setup: {0}")]
    InvalidSetup(String),
}

impl EngineError {
    /// Create an invalid-setup error.
    pub fn invalid_setup(reason: impl Into<String>) -> Self {
        Self::InvalidSetup(reason.into())
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
