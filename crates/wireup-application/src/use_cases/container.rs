//! Container Use Case
//!
//! Facade over the registry and resolver: register constructors, declare
//! capabilities, install catalog modules, then resolve roots. The container
//! is immutable during resolution, so one container serves any number of
//! concurrent `resolve` calls, each with its own value store.

use std::sync::Arc;

use tracing::{debug, info};
use wireup_domain::Result;

use crate::domain_services::{ResolutionReport, Registry, Resolver};
use crate::injection::{ConstructorSpec, IntoConstructor, Root};
use crate::ports::registry::install_module;

/// Constructor registry plus the resolution entry points
#[derive(Debug, Default)]
pub struct Container {
    registry: Registry,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already populated registry
    pub fn from_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// Register a typed constructor
    ///
    /// Any `Fn(A1, .., An) -> R` whose parameters are `Arc<T>` or
    /// `Vec<Arc<T>>` is accepted. `R` is stored behind an `Arc` and shared by
    /// every dependent within one resolution.
    pub fn register<Args, C>(&mut self, constructor: C) -> Result<&mut Self>
    where
        C: IntoConstructor<Args>,
    {
        self.registry.register(constructor)?;
        Ok(self)
    }

    /// Register a constructor described at runtime
    pub fn register_spec(&mut self, spec: ConstructorSpec) -> Result<&mut Self> {
        self.registry.register_spec(spec)?;
        Ok(self)
    }

    /// Declare that values produced as `C` satisfy requests for `I`
    pub fn implements<I, C, F>(&mut self, cast: F) -> Result<&mut Self>
    where
        I: ?Sized + Send + Sync + 'static,
        C: ?Sized + Send + Sync + 'static,
        F: Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static,
    {
        self.registry.implements::<I, C, F>(cast)?;
        Ok(self)
    }

    /// Install a module from the link-time catalog
    pub fn install(&mut self, module: &str) -> Result<&mut Self> {
        install_module(&mut self.registry, module)?;
        Ok(self)
    }

    /// Registered constructors and capability declarations
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Build and return a populated root.
    ///
    /// Every constructor runs at most once per call. Values are not shared
    /// between calls.
    pub fn resolve<R: Root>(&self) -> Result<R> {
        self.resolve_with_report().map(|(root, _)| root)
    }

    /// Like [`Container::resolve`], also returning the invoked constructors
    pub fn resolve_with_report<R: Root>(&self) -> Result<(R, ResolutionReport)> {
        debug!(
            root = std::any::type_name::<R>(),
            constructors = self.registry.len(),
            "Resolving root"
        );
        let (root, report) = Resolver::new(&self.registry).resolve::<R>()?;
        info!(
            root = std::any::type_name::<R>(),
            invoked = report.len(),
            "Root resolved"
        );
        Ok((root, report))
    }
}
