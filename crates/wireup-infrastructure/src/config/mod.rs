//! Configuration
//!
//! Figment-based configuration: compiled defaults, then an optional TOML
//! file, then `WIREUP_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ContainerConfig, LoggingConfig};
