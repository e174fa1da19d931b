//! Application layer - Engine, configuration and wiring
//!
//! This layer orchestrates domain capabilities. Only the composition root
//! knows about concrete infrastructure.

pub mod composition;
pub mod config;
pub mod dependency_injection;
pub mod engine;

pub use composition::*;
pub use config::*;
pub use dependency_injection::*;
pub use engine::*;
