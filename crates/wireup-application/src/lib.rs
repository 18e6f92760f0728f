//! Application Layer - Wireup
//!
//! Constructor registration and object-graph resolution.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the resolver over a type-erased constructor registry
//! - Bridges typed Rust constructors and roots to that registry
//! - Exposes the link-time module catalog other crates plug into
//! - Has no dependencies on infrastructure (config, log output)
//!
//! ## Modules
//!
//! - `domain_services::*`: Registry, capability table, value store, resolver
//! - `injection::*`: Typed constructors, dependencies and roots
//! - `ports::registry::*`: Constructor module catalog
//! - `use_cases::*`: The `Container` facade
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wireup_application::{Container, capability, root};
//!
//! let mut container = Container::new();
//! container.register(|| Config::default())?;
//! container.register(|config: Arc<Config>| Service::new(config))?;
//!
//! root! { struct App { service: Arc<Service> } }
//! let app: App = container.resolve()?;
//! ```

pub mod domain_services;
pub mod injection;
pub mod ports;
pub mod use_cases;

pub use wireup_domain;

pub use domain_services::*;
pub use injection::*;
pub use ports::{CONSTRUCTOR_MODULES, ModuleEntry, install_module, list_modules};
pub use use_cases::*;
