//! Domain Port Interfaces
//!
//! Contracts the resolution engine depends on without knowing their
//! implementation. The application layer provides the concrete capability
//! table; tests may provide their own.

/// Capability matching port
pub mod capability;

pub use capability::CapabilityMatcher;
