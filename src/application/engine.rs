//! Application engine - Asks a greeter for its greeting and shows it

use crate::domain::{DisplayError, Greeter, OutputDisplay};
use std::sync::Arc;

/// Engine composed of one greeter and one output display
pub struct AppEngine {
    greeter: Arc<dyn Greeter>,
    output_display: Arc<dyn OutputDisplay>,
}

impl AppEngine {
    pub fn new(greeter: Arc<dyn Greeter>, output_display: Arc<dyn OutputDisplay>) -> Self {
        Self {
            greeter,
            output_display,
        }
    }

    /// Fetch the greeting once and hand it to the display unmodified
    pub fn run(&self) -> Result<(), DisplayError> {
        let greeting = self.greeter.greeting();
        self.output_display.show(greeting.as_str())
    }

    /// Greeter bound into this engine, for inspecting the wiring
    pub fn greeter(&self) -> &Arc<dyn Greeter> {
        &self.greeter
    }
}
