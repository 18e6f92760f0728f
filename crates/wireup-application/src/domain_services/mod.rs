//! Domain Services
//!
//! The resolution engine. Leaf-first:
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`CapabilityTable`] | Decides whether a produced type satisfies a request |
//! | [`Registry`] | Ordered constructor descriptors and lookup by requested type |
//! | [`ValueStore`] | Produced values per type plus the per-constructor cache |
//! | [`Resolver`] | Worklist walk that invokes constructors in dependency order |

/// Capability declarations and matching
pub mod capability;
/// Constructor registry
pub mod registry;
/// Graph resolution
pub mod resolver;
/// Per-call value storage
pub mod value_store;

pub use capability::CapabilityTable;
pub use registry::{ConstructorDescriptor, Registry};
pub use resolver::{Invocation, ResolutionReport, Resolver};
pub use value_store::ValueStore;
