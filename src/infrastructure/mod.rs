//! Infrastructure layer - Concrete sinks behind domain capabilities

pub mod console;

pub use console::ConsoleOutputDisplay;
