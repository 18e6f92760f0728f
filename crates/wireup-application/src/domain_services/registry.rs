//! Constructor Registry
//!
//! Append-only, ordered collection of constructor descriptors plus the
//! capability table used to match them against requests. Registration order
//! is significant: it is the order in which multi-bound values are handed out.

use std::sync::Arc;

use dashmap::DashMap;
use itertools::Itertools;
use tracing::debug;
use wireup_domain::{
    CapabilityMatcher, ConstructorId, Error, Instance, Result, TypeDescriptor, TypeKey,
};

use super::capability::CapabilityTable;
use crate::injection::{Argument, ConstructorSpec, IntoConstructor, Invoker};

/// A registered constructor: identity, shape and body
pub struct ConstructorDescriptor {
    id: ConstructorId,
    name: String,
    parameters: Vec<TypeDescriptor>,
    produces: TypeDescriptor,
    invoker: Invoker,
}

impl ConstructorDescriptor {
    /// Identity, equal to the registration position
    pub fn id(&self) -> ConstructorId {
        self.id
    }

    /// Name used in logs, reports and errors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter requests, in declaration order
    pub fn parameters(&self) -> &[TypeDescriptor] {
        &self.parameters
    }

    /// Produced type
    pub fn produces(&self) -> TypeDescriptor {
        self.produces
    }

    /// Run the constructor body with one argument per parameter
    pub fn invoke(&self, arguments: Vec<Argument>) -> Result<Instance> {
        (self.invoker)(arguments)
    }
}

impl std::fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("produces", &self.produces)
            .finish()
    }
}

impl std::fmt::Display for ConstructorDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) -> {}",
            self.name,
            self.parameters.iter().join(", "),
            self.produces
        )
    }
}

/// Ordered constructor registry
///
/// Lookups are memoized per requested type; the memo is dropped whenever a
/// constructor or capability is added. The memo is the only state shared by
/// concurrent resolution calls over the same registry.
#[derive(Default)]
pub struct Registry {
    constructors: Vec<ConstructorDescriptor>,
    capabilities: CapabilityTable,
    matching: DashMap<TypeKey, Arc<[ConstructorId]>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a typed constructor
    pub fn register<Args, C>(&mut self, constructor: C) -> Result<ConstructorId>
    where
        C: IntoConstructor<Args>,
    {
        self.register_spec(constructor.into_spec())
    }

    /// Register a constructor described at runtime.
    ///
    /// Fails with [`Error::Registration`] when the spec has no body or does
    /// not declare exactly one produced value.
    pub fn register_spec(&mut self, spec: ConstructorSpec) -> Result<ConstructorId> {
        let name = spec.name().to_string();

        let Some(invoker) = spec.invoker else {
            return Err(Error::registration(name, "constructor is not invocable"));
        };
        let Some(produces) = spec.produces else {
            return Err(Error::registration(
                name,
                "constructor must declare a single produced type",
            ));
        };
        if produces.is_multi() {
            return Err(Error::registration(
                name,
                format!("constructor must produce a single value, not the collection {produces}"),
            ));
        }

        let id = ConstructorId::new(self.constructors.len());
        let descriptor = ConstructorDescriptor {
            id,
            name,
            parameters: spec.parameters,
            produces,
            invoker,
        };
        debug!(constructor = %descriptor, id = %id, "Registered constructor");

        self.constructors.push(descriptor);
        self.matching.clear();
        Ok(id)
    }

    /// Declare that `C` satisfies the capability `I`
    pub fn implements<I, C, F>(&mut self, cast: F) -> Result<()>
    where
        I: ?Sized + Send + Sync + 'static,
        C: ?Sized + Send + Sync + 'static,
        F: Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static,
    {
        self.capabilities.bind::<I, C, F>(cast)?;
        debug!(
            capability = std::any::type_name::<I>(),
            implementor = std::any::type_name::<C>(),
            "Declared capability implementation"
        );
        self.matching.clear();
        Ok(())
    }

    /// Every constructor whose output satisfies `requested`, in registration order.
    ///
    /// Multi-binding requests are matched on their element type.
    pub fn find_matching(&self, requested: &TypeDescriptor) -> Vec<&ConstructorDescriptor> {
        let requested = requested.element();
        let ids = self
            .matching
            .entry(requested.key())
            .or_insert_with(|| {
                self.constructors
                    .iter()
                    .filter(|constructor| {
                        self.capabilities.matches(&constructor.produces, &requested)
                    })
                    .map(ConstructorDescriptor::id)
                    .collect()
            })
            .clone();

        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    /// Number of constructors whose output satisfies `requested`
    pub fn count_matching(&self, requested: &TypeDescriptor) -> usize {
        self.find_matching(requested).len()
    }

    /// Constructor by id
    pub fn get(&self, id: ConstructorId) -> Option<&ConstructorDescriptor> {
        self.constructors.get(id.position())
    }

    /// All constructors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ConstructorDescriptor> {
        self.constructors.iter()
    }

    /// Capability declarations
    pub fn capabilities(&self) -> &CapabilityTable {
        &self.capabilities
    }

    /// Number of registered constructors
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("constructors", &self.constructors)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}
