//! Domain Value Objects
//!
//! Immutable values that identify types and carry constructed instances.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Runtime identity of a Rust type, sized or not |
//! | [`TypeDescriptor`] | A requested or produced type, scalar or multi-binding |
//! | [`ConstructorId`] | Identity and registration position of a constructor |
//! | [`Instance`] | Type-erased shared pointer to a constructed value |

/// Type identities and descriptors
pub mod type_descriptor;
/// Constructor identity
pub mod constructor_id;
/// Type-erased instances
pub mod instance;

pub use constructor_id::ConstructorId;
pub use instance::Instance;
pub use type_descriptor::{TypeDescriptor, TypeKey};
