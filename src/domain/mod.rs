//! Domain layer - Greeting values and the capabilities the engine depends on
//!
//! Nothing here knows about concrete sinks or how bindings are chosen.

pub mod display;
pub mod errors;
pub mod greeter;
pub mod value_objects;

pub use display::*;
pub use errors::*;
pub use greeter::*;
pub use value_objects::*;
