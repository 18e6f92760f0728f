//! # Domain Layer
//!
//! Core vocabulary of the wireup object-graph builder.
//!
//! This crate holds the pieces every other layer speaks in terms of:
//! type identities, type-erased instances and the error taxonomy. It has no
//! knowledge of how constructors are stored or how a graph is walked.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `TypeKey`, `TypeDescriptor`, `ConstructorId`, `Instance` |
//! | [`ports`] | Contracts implemented by the application layer |
//! | [`error`] | Wiring error kinds and the crate `Result` alias |
//! | [`constants`] | Shared constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::CapabilityMatcher;
pub use value_objects::{ConstructorId, Instance, TypeDescriptor, TypeKey};
