//! Domain errors - Failures surfaced by greeting output and wiring

use thiserror::Error;

/// Errors raised while showing a message on an output sink
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Failed to write message to output sink")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl DisplayError {
    pub fn write(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}

/// Errors raised while resolving services from the dependency container
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("No binding registered for capability '{capability}'")]
    Unbound { capability: &'static str },
}

impl CompositionError {
    pub fn unbound(capability: &'static str) -> Self {
        Self::Unbound { capability }
    }
}
