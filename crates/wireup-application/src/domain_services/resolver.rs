//! Graph Resolver
//!
//! Walks the constructor graph from the requested types with an explicit
//! depth-first worklist, invoking each constructor once its parameters are
//! available.
//!
//! ## Algorithm
//!
//! ```text
//! pop target ──► mark element visited ──► candidates = registry.find_matching(target)
//!                                              │
//!        ┌─────────────────────────────────────┼──────────────────────────────┐
//!        ▼                                     ▼                              ▼
//!   cached: store view              ready: bind args, invoke,       not ready: pending,
//!   (no second invocation)          cache, store view               queue missing params
//!                                                                   (visited + unresolved
//!                                                                    param = cycle)
//! ```
//!
//! A target with no pending candidate is done: it leaves the worklist and its
//! visited mark is cleared, so the visited set only ever holds the types on
//! the active resolution path. A target with pending candidates goes back on
//! the worklist underneath its missing parameters and is retried once they
//! are resolved. Every retry either fails or marks a type that was not on the
//! path before, and a completed type stays resolved, so the walk ends.
//!
//! Root fields are read back from the value store: a scalar field takes the
//! first stored value for its type and a multi-binding field takes them all.
//! Only constructor arguments are subject to the ambiguity check.
//!
//! A multi-binding target `[T]` has no constructor of its own: processing it
//! drives every constructor matching `T` and it is complete once all of them
//! have a value (an empty set of implementations is complete immediately).

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace, warn};
use wireup_domain::{CapabilityMatcher, ConstructorId, Error, Instance, Result, TypeDescriptor, TypeKey};

use super::registry::{ConstructorDescriptor, Registry};
use super::value_store::ValueStore;
use crate::injection::{Argument, Root};

/// One constructor invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Constructor identity
    pub constructor: ConstructorId,
    /// Constructor name
    pub name: String,
    /// Produced type
    pub produces: TypeDescriptor,
}

/// Constructors invoked by one resolution call, in invocation order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolutionReport {
    invocations: Vec<Invocation>,
}

impl ResolutionReport {
    /// Invocations in the order they happened
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// How many times a constructor ran; at most one
    pub fn times_invoked(&self, constructor: ConstructorId) -> usize {
        self.invocations
            .iter()
            .filter(|invocation| invocation.constructor == constructor)
            .count()
    }

    /// Number of invocations
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    /// Whether nothing was invoked
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    fn record(&mut self, constructor: &ConstructorDescriptor) {
        self.invocations.push(Invocation {
            constructor: constructor.id(),
            name: constructor.name().to_string(),
            produces: constructor.produces(),
        });
    }
}

impl std::fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (step, invocation) in self.invocations.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {} -> {}",
                step + 1,
                invocation.name,
                invocation.produces
            )?;
        }
        Ok(())
    }
}

/// Single-use resolution state over a registry.
///
/// Owns the value store and visited set of one call; a new resolver is
/// created for every call and dropped at its end, successful or not.
pub struct Resolver<'r> {
    registry: &'r Registry,
    store: ValueStore,
    visited: HashSet<TypeKey>,
    report: ResolutionReport,
}

impl<'r> Resolver<'r> {
    /// Start a resolution over `registry`
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            store: ValueStore::new(),
            visited: HashSet::new(),
            report: ResolutionReport::default(),
        }
    }

    /// Resolve every field of `R` and assemble it
    pub fn resolve<R: Root>(mut self) -> Result<(R, ResolutionReport)> {
        let requests = R::requests();
        for request in &requests {
            self.resolve_type(*request)?;
        }

        let arguments = requests
            .iter()
            .map(|request| self.read_back(request))
            .collect::<Result<Vec<_>>>()?;
        let root = R::assemble(arguments)?;

        debug!(
            fields = requests.len(),
            invoked = self.report.len(),
            "Resolution complete"
        );
        Ok((root, self.report))
    }

    /// Drain a worklist seeded with `request`
    pub fn resolve_type(&mut self, request: TypeDescriptor) -> Result<()> {
        let mut worklist = vec![request];

        while let Some(target) = worklist.pop() {
            let element = target.element();
            self.visited.insert(element.key());

            let candidates = self.registry.find_matching(&element);
            trace!(request = %target, candidates = candidates.len(), "Processing worklist entry");

            if candidates.is_empty() && !target.is_multi() {
                warn!(dependency = %target, "No constructor defined");
                return Err(Error::missing_dependency(target));
            }

            let mut pending = Vec::new();
            for constructor in candidates {
                if let Some(instance) = self.store.cached(constructor.id()).cloned() {
                    trace!(constructor = constructor.name(), "Reusing constructed value");
                    self.store_view(constructor, &instance, element)?;
                } else if self.is_invokable(constructor) {
                    let instance = self.invoke(constructor)?;
                    self.store_view(constructor, &instance, element)?;
                } else {
                    pending.push(constructor);
                }
            }

            if pending.is_empty() {
                if !worklist.iter().any(|entry| entry.key() == element.key()) {
                    self.visited.remove(&element.key());
                }
                continue;
            }

            let missing = self.missing_parameters(target, &pending)?;
            worklist.push(target);
            worklist.extend(missing.into_iter().rev());
        }

        Ok(())
    }

    /// Whether `ty` can be bound right now.
    ///
    /// A scalar type needs at least one value; a multi-binding type needs a
    /// value from every matching constructor.
    pub fn is_resolved(&self, ty: &TypeDescriptor) -> bool {
        let element = ty.element();
        let stored = self.store.count_for(&element);
        if ty.is_multi() {
            stored == self.registry.count_matching(&element)
        } else {
            stored > 0
        }
    }

    fn is_invokable(&self, constructor: &ConstructorDescriptor) -> bool {
        constructor
            .parameters()
            .iter()
            .all(|parameter| self.is_resolved(parameter))
    }

    fn missing_parameters(
        &self,
        target: TypeDescriptor,
        pending: &[&ConstructorDescriptor],
    ) -> Result<Vec<TypeDescriptor>> {
        let mut missing: Vec<TypeDescriptor> = Vec::new();

        for constructor in pending {
            for parameter in constructor.parameters() {
                if self.is_resolved(parameter) {
                    continue;
                }
                if self.visited.contains(&parameter.key()) {
                    warn!(
                        parameter = %parameter,
                        dependent = %target,
                        constructor = constructor.name(),
                        "Cycle detected"
                    );
                    return Err(Error::cycle(*parameter, target));
                }
                if !missing.contains(parameter) {
                    missing.push(*parameter);
                }
            }
        }

        Ok(missing)
    }

    fn invoke(&mut self, constructor: &ConstructorDescriptor) -> Result<Instance> {
        let arguments = constructor
            .parameters()
            .iter()
            .map(|parameter| self.bind(parameter))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            constructor = constructor.name(),
            produces = %constructor.produces(),
            "Invoking constructor"
        );
        let instance = constructor.invoke(arguments)?;

        self.store.cache(constructor.id(), instance.clone());
        self.report.record(constructor);
        Ok(instance)
    }

    fn read_back(&self, request: &TypeDescriptor) -> Result<Argument> {
        let values = self.store.get(&request.element());
        if request.is_multi() {
            return Ok(Argument::Many(values));
        }
        values
            .into_iter()
            .next()
            .map(Argument::Single)
            .ok_or_else(|| Error::missing_dependency(*request))
    }

    fn bind(&self, parameter: &TypeDescriptor) -> Result<Argument> {
        let values = self.store.get(&parameter.element());
        if parameter.is_multi() {
            return Ok(Argument::Many(values));
        }

        let candidates = values.len();
        let mut values = values.into_iter();
        match (values.next(), candidates) {
            (Some(value), 1) => Ok(Argument::Single(value)),
            (None, _) => Err(Error::missing_dependency(*parameter)),
            (Some(_), _) => {
                warn!(dependency = %parameter, candidates, "Ambiguous dependency");
                Err(Error::ambiguous(*parameter, candidates))
            }
        }
    }

    fn store_view(
        &mut self,
        constructor: &ConstructorDescriptor,
        instance: &Instance,
        element: TypeDescriptor,
    ) -> Result<()> {
        if self.store.holds(&element, constructor.id()) {
            return Ok(());
        }
        let view = self
            .registry
            .capabilities()
            .view(instance, &constructor.produces(), &element)?;
        self.store.put(element, constructor.id(), view);
        Ok(())
    }
}
