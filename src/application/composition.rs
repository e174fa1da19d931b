//! Composition root - The one place concrete variants are chosen and wired

use super::config::AppConfig;
use super::dependency_injection::DependencyContainer;
use super::engine::AppEngine;
use crate::domain::{CompositionError, greeter_for};
use crate::infrastructure::ConsoleOutputDisplay;
use std::sync::Arc;

/// Bind the configured greeter and the console display
pub fn configure_dependencies(config: &AppConfig) -> DependencyContainer {
    DependencyContainer::new()
        .register_greeter(greeter_for(config.language))
        .register_output_display(Arc::new(ConsoleOutputDisplay::new()))
}

/// Build the engine from the default configuration (English greeter)
pub fn build_engine() -> Result<AppEngine, CompositionError> {
    build_engine_with(&AppConfig::default())
}

pub fn build_engine_with(config: &AppConfig) -> Result<AppEngine, CompositionError> {
    log::debug!("Composing engine with {} greeter", config.language);
    configure_dependencies(config).get_app_engine()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    #[test]
    fn default_engine_binds_english() {
        let engine = build_engine().unwrap();
        assert_eq!(engine.greeter().language(), Language::English);
    }

    #[test]
    fn configured_language_selects_greeter() {
        for language in Language::ALL {
            let engine = build_engine_with(&AppConfig::with_language(language)).unwrap();
            assert_eq!(engine.greeter().language(), language);
        }
    }

    #[test]
    fn configuration_binds_both_capabilities() {
        let container = configure_dependencies(&AppConfig::default());
        assert_eq!(container.len(), 2);
    }
}
