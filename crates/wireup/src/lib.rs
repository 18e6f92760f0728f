//! # Wireup
//!
//! A constructor-based object-graph builder. Register plain constructor
//! functions, declare which capabilities (`dyn Trait`) their outputs
//! satisfy, and ask for a root; wireup works out the construction order,
//! calls every needed constructor exactly once and hands back the populated
//! root.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wireup::{Container, capability, root};
//!
//! let mut container = Container::new();
//! container
//!     .register(|| English)?
//!     .register(|| Spanish)?
//!     .register(|greeters: Vec<Arc<dyn Greeter>>| Banner::new(greeters))?;
//! capability!(container, dyn Greeter => English, Spanish)?;
//!
//! root! {
//!     struct App {
//!         banner: Arc<Banner>,
//!     }
//! }
//!
//! let app: App = container.resolve()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type descriptors, instances, error taxonomy
//! - `application` - Registry, resolver, typed injection surface, module catalog
//! - `infrastructure` - Configuration, logging, bootstrap from configuration
//! - [`demo`] - Modules used by the `wireup` binary

/// Domain layer - descriptors, instances and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wireup_domain::*;
}

/// Application layer - registry, resolver and container
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use wireup_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wireup_infrastructure::*;
}

pub mod demo;

// Re-export commonly used types at the crate root
pub use domain::{Error, Result, TypeDescriptor};

pub use application::{
    Container, ConstructorSpec, Registry, ResolutionReport, Root, install_module, list_modules,
};

// Declarative macros
pub use wireup_application::{capability, root};
