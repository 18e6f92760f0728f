//! Capability Table
//!
//! Explicit "implements" declarations between concrete produced types and
//! capability types (`dyn Trait`). Rust has no structural typing at runtime,
//! so every implementation a resolution may rely on is declared once, at
//! registration time, together with the unsizing cast that produces the
//! capability view.
//!
//! ```ignore
//! registry.implements::<dyn Greeter, English>(|english| english)?;
//! // or, for several implementors at once
//! capability!(registry, dyn Greeter => English, Spanish);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use wireup_domain::{CapabilityMatcher, Error, Instance, Result, TypeDescriptor, TypeKey};

type Upcast = Box<dyn Fn(&Instance) -> Option<Instance> + Send + Sync>;

/// Declared capability implementations, keyed by `(capability, implementor)`
#[derive(Default)]
pub struct CapabilityTable {
    bindings: HashMap<(TypeKey, TypeKey), Upcast>,
}

impl CapabilityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `C` satisfies the capability `I`.
    ///
    /// `cast` converts a shared `C` into the capability view; for trait
    /// objects this is the identity closure, relying on unsizing coercion.
    pub fn bind<I, C, F>(&mut self, cast: F) -> Result<()>
    where
        I: ?Sized + Send + Sync + 'static,
        C: ?Sized + Send + Sync + 'static,
        F: Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static,
    {
        let capability = TypeKey::of::<I>();
        let implementor = TypeKey::of::<C>();
        let label = format!("{implementor} as {capability}");

        if capability == implementor {
            return Err(Error::registration(
                label,
                "a type cannot be declared as a capability of itself",
            ));
        }
        if self.bindings.contains_key(&(capability, implementor)) {
            return Err(Error::registration(
                label,
                "capability implementation already declared",
            ));
        }

        let upcast: Upcast =
            Box::new(move |instance| instance.downcast::<C>().map(|value| Instance::new(cast(value))));
        self.bindings.insert((capability, implementor), upcast);
        Ok(())
    }

    /// Whether `implementor` was declared to satisfy `capability`
    pub fn implements(&self, capability: TypeKey, implementor: TypeKey) -> bool {
        self.bindings.contains_key(&(capability, implementor))
    }

    /// Number of declared implementations
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no implementation has been declared
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl CapabilityMatcher for CapabilityTable {
    fn matches(&self, produced: &TypeDescriptor, requested: &TypeDescriptor) -> bool {
        let produced = produced.key();
        let requested = requested.key();
        produced == requested || self.implements(requested, produced)
    }

    fn view(
        &self,
        instance: &Instance,
        produced: &TypeDescriptor,
        requested: &TypeDescriptor,
    ) -> Result<Instance> {
        if produced.key() == requested.key() {
            return Ok(instance.clone());
        }
        self.bindings
            .get(&(requested.key(), produced.key()))
            .and_then(|upcast| upcast(instance))
            .ok_or_else(|| Error::type_mismatch(requested.name(), instance.type_name()))
    }
}

impl std::fmt::Debug for CapabilityTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pairs: Vec<String> = self
            .bindings
            .keys()
            .map(|(capability, implementor)| format!("{implementor} as {capability}"))
            .collect();
        pairs.sort();
        f.debug_struct("CapabilityTable")
            .field("bindings", &pairs)
            .finish()
    }
}
