//! Dependency injection tests
//! Tests the resolve functionality and service registration

use std::sync::Arc;
use hilsen::application::dependency_injection::DependencyContainer;
use hilsen::domain::{
    CompositionError, DisplayError, EnglishGreeter, FrenchGreeter, Greeter, OutputDisplay,
};

/// Display that discards everything, for wiring tests
struct NullDisplay;

impl OutputDisplay for NullDisplay {
    fn show(&self, _: &str) -> Result<(), DisplayError> {
        Ok(())
    }
}

#[test]
fn test_resolve_min_impl() {
    let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
    let container = DependencyContainer::new().register_greeter(greeter.clone());

    let resolved: Option<Arc<dyn Greeter>> = container.resolve();
    assert!(resolved.is_some());

    // Same instance, not a copy
    assert!(Arc::ptr_eq(&greeter, &resolved.unwrap()));
}

#[test]
fn test_resolve_returns_none_for_unregistered() {
    let container = DependencyContainer::new();

    let resolved: Option<Arc<dyn OutputDisplay>> = container.resolve();
    assert!(resolved.is_none());
    assert!(container.is_empty());
}

#[test]
fn test_resolve_multiple_services() {
    let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
    let display: Arc<dyn OutputDisplay> = Arc::new(NullDisplay);

    let container = DependencyContainer::new()
        .register_greeter(greeter.clone())
        .register_output_display(display.clone());

    let resolved_greeter: Option<Arc<dyn Greeter>> = container.resolve();
    let resolved_display: Option<Arc<dyn OutputDisplay>> = container.resolve();

    assert!(Arc::ptr_eq(&greeter, &resolved_greeter.unwrap()));
    assert!(Arc::ptr_eq(&display, &resolved_display.unwrap()));
    assert_eq!(container.len(), 2);
}

#[test]
fn test_rebinding_replaces_previous_greeter() {
    let container = DependencyContainer::new()
        .register_greeter(Arc::new(EnglishGreeter))
        .register_greeter(Arc::new(FrenchGreeter));

    let resolved: Arc<dyn Greeter> = container.resolve().unwrap();
    assert_eq!(resolved.greeting().as_str(), "Bonjour");
    assert_eq!(container.len(), 1);
}

#[test]
fn test_get_app_engine() {
    let container = DependencyContainer::new()
        .register_greeter(Arc::new(EnglishGreeter))
        .register_output_display(Arc::new(NullDisplay));

    let engine = container.get_app_engine().unwrap();
    assert!(engine.run().is_ok());
}

#[test]
fn test_get_app_engine_fails_without_greeter() {
    let container = DependencyContainer::new().register_output_display(Arc::new(NullDisplay));

    match container.get_app_engine() {
        Err(error) => {
            assert_eq!(error, CompositionError::Unbound { capability: "Greeter" });
            assert!(error.to_string().contains("Greeter"));
        }
        Ok(_) => panic!("Expected unbound greeter error"),
    }
}

#[test]
fn test_get_app_engine_fails_without_output_display() {
    let container = DependencyContainer::new().register_greeter(Arc::new(EnglishGreeter));

    match container.get_app_engine() {
        Err(CompositionError::Unbound { capability }) => assert_eq!(capability, "OutputDisplay"),
        Ok(_) => panic!("Expected unbound output display error"),
    }
}
