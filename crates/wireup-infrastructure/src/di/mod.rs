//! Container Bootstrap
//!
//! Composition root: turns an [`AppConfig`](crate::config::AppConfig) into a
//! populated [`Container`](wireup_application::Container) by installing
//! modules from the link-time catalog.

pub mod bootstrap;

pub use bootstrap::{build_container, selected_modules};
