//! Application Ports
//!
//! Extension points other crates plug into.
//!
//! - **registry** - Link-time catalog of named constructor modules

/// Constructor module registry
pub mod registry;

pub use registry::{CONSTRUCTOR_MODULES, ModuleEntry, install_module, list_modules};
