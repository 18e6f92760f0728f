//! Capability Matcher Port
//!
//! Decides whether a produced type satisfies a requested type.

use crate::error::Result;
use crate::value_objects::{Instance, TypeDescriptor};

/// Decides whether a produced type satisfies a requested type, and converts
/// produced values into the representation the requester expects.
///
/// A produced type always satisfies an identical request. It additionally
/// satisfies a capability request (`dyn Trait`) when an implementation of that
/// capability has been declared for it. Multi-binding requests are matched on
/// their element type.
pub trait CapabilityMatcher: Send + Sync {
    /// Whether a value of type `produced` can be handed out for `requested`
    fn matches(&self, produced: &TypeDescriptor, requested: &TypeDescriptor) -> bool;

    /// Present `instance` (of type `produced`) as a value of `requested`.
    ///
    /// Identical types return the instance unchanged. For a capability the
    /// result points at the same allocation through the capability's vtable.
    fn view(
        &self,
        instance: &Instance,
        produced: &TypeDescriptor,
        requested: &TypeDescriptor,
    ) -> Result<Instance>;
}
