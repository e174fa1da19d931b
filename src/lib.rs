//! # hilsen
//!
//! A small dependency injection example: a container wires an application
//! engine to a greeter and an output display, and the engine prints the
//! greeting.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hilsen::application::{AppConfig, build_engine_with};
//! use hilsen::domain::Language;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = build_engine_with(&AppConfig::with_language(Language::Norwegian))?;
//! engine.run()?; // prints "Hei"
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Bindings
//!
//! ```rust
//! use std::sync::Arc;
//! use hilsen::application::DependencyContainer;
//! use hilsen::domain::EnglishGreeter;
//! use hilsen::infrastructure::ConsoleOutputDisplay;
//!
//! let engine = DependencyContainer::new()
//!     .register_greeter(Arc::new(EnglishGreeter))
//!     .register_output_display(Arc::new(ConsoleOutputDisplay::with_writer(std::io::sink())))
//!     .get_app_engine()
//!     .unwrap();
//! engine.run().unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{AppConfig, AppEngine, DependencyContainer, build_engine, build_engine_with};
pub use domain::{CompositionError, DisplayError, Greeter, Greeting, Language, OutputDisplay};
