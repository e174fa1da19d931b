//! Dependency injection container for the application layer
//!
//! # Dependency Injection Pattern
//!
//! The container maps each capability the engine needs to exactly one bound
//! implementation, and builds the engine from those bindings.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use hilsen::application::dependency_injection::DependencyContainer;
//! use hilsen::domain::FrenchGreeter;
//! use hilsen::infrastructure::ConsoleOutputDisplay;
//!
//! let container = DependencyContainer::new()
//!     .register_greeter(Arc::new(FrenchGreeter))
//!     .register_output_display(Arc::new(ConsoleOutputDisplay::new()));
//!
//! let engine = container.get_app_engine().unwrap();
//! ```
//!
//! ## Current Implementation
//!
//! - HashMap-based container using TypeId for service lookup
//! - Builder pattern for registration; registering again replaces the binding
//! - `resolve` returns None for unregistered services, `get_app_engine`
//!   reports which capability is missing

use super::engine::AppEngine;
use crate::domain::{CompositionError, Greeter, OutputDisplay};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

/// Simple dependency injection container
pub struct DependencyContainer {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Register the greeter capability
    pub fn register_greeter(self, greeter: Arc<dyn Greeter>) -> Self {
        log::trace!("Binding greeter to {} variant", greeter.language());
        self.register::<Arc<dyn Greeter>>(greeter)
    }

    /// Register the output display capability
    pub fn register_output_display(self, display: Arc<dyn OutputDisplay>) -> Self {
        self.register::<Arc<dyn OutputDisplay>>(display)
    }

    /// Resolve a service by type
    pub fn resolve<T: 'static + Clone>(&self) -> Option<T> {
        self.get_service::<T>()
    }

    /// Number of registered capabilities
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Build the application engine from the registered bindings
    pub fn get_app_engine(&self) -> Result<AppEngine, CompositionError> {
        let greeter = self.require::<Arc<dyn Greeter>>("Greeter")?;
        let output_display = self.require::<Arc<dyn OutputDisplay>>("OutputDisplay")?;

        Ok(AppEngine::new(greeter, output_display))
    }

    fn register<T: 'static + Send + Sync>(mut self, service: T) -> Self {
        log::trace!("Registering {}", type_name::<T>());
        self.services.insert(TypeId::of::<T>(), Box::new(service));
        self
    }

    fn require<T: 'static + Clone>(&self, capability: &'static str) -> Result<T, CompositionError> {
        self.get_service::<T>()
            .ok_or_else(|| CompositionError::unbound(capability))
    }

    /// Helper to get a service from the container
    fn get_service<T: 'static + Clone>(&self) -> Option<T> {
        log::trace!("Resolving {}", type_name::<T>());
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|service| service.downcast_ref::<T>())
            .cloned()
    }
}

impl Default for DependencyContainer {
    fn default() -> Self {
        Self::new()
    }
}
