//! Output display capability

use super::errors::DisplayError;

/// Capability: render a message on a visible sink
pub trait OutputDisplay: Send + Sync {
    fn show(&self, message: &str) -> Result<(), DisplayError>;
}
