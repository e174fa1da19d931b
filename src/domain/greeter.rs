//! Greeters - Sources of a fixed greeting per language

use super::value_objects::{Greeting, Language};
use std::sync::Arc;

/// Capability: produce a greeting
pub trait Greeter: Send + Sync {
    /// Return this greeter's greeting. Never fails, never changes.
    fn greeting(&self) -> Greeting;

    fn language(&self) -> Language;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishGreeter;

impl Greeter for EnglishGreeter {
    fn greeting(&self) -> Greeting {
        Greeting::new("Hello")
    }

    fn language(&self) -> Language {
        Language::English
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchGreeter;

impl Greeter for FrenchGreeter {
    fn greeting(&self) -> Greeting {
        Greeting::new("Bonjour")
    }

    fn language(&self) -> Language {
        Language::French
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NorwegianGreeter;

impl Greeter for NorwegianGreeter {
    fn greeting(&self) -> Greeting {
        Greeting::new("Hei")
    }

    fn language(&self) -> Language {
        Language::Norwegian
    }
}

/// Build the greeter bound to a language
pub fn greeter_for(language: Language) -> Arc<dyn Greeter> {
    match language {
        Language::English => Arc::new(EnglishGreeter),
        Language::French => Arc::new(FrenchGreeter),
        Language::Norwegian => Arc::new(NorwegianGreeter),
    }
}
