//! Value Store
//!
//! Per-call storage of produced values: an ordered list per requested type
//! and the per-constructor cache that makes every constructor a singleton
//! within one resolution.

use std::collections::HashMap;

use wireup_domain::{ConstructorId, Instance, TypeDescriptor};

/// Produced values of one resolution call
#[derive(Debug, Default)]
pub struct ValueStore {
    by_type: HashMap<TypeDescriptor, Vec<(ConstructorId, Instance)>>,
    by_constructor: HashMap<ConstructorId, Instance>,
}

impl ValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `instance`, produced by `producer`, as a value of `ty`.
    ///
    /// Values of one type stay sorted by producer id, which is registration
    /// order, whatever order the producers ran in. Returns `false` without
    /// changing anything when `producer` already has a value for `ty`.
    pub fn put(&mut self, ty: TypeDescriptor, producer: ConstructorId, instance: Instance) -> bool {
        let values = self.by_type.entry(ty).or_default();
        match values.binary_search_by_key(&producer, |(id, _)| *id) {
            Ok(_) => false,
            Err(position) => {
                values.insert(position, (producer, instance));
                true
            }
        }
    }

    /// Whether `producer` already has a value recorded for `ty`
    pub fn holds(&self, ty: &TypeDescriptor, producer: ConstructorId) -> bool {
        self.by_type
            .get(ty)
            .is_some_and(|values| values.iter().any(|(id, _)| *id == producer))
    }

    /// Values of `ty` in registration order
    pub fn get(&self, ty: &TypeDescriptor) -> Vec<Instance> {
        self.by_type
            .get(ty)
            .map(|values| values.iter().map(|(_, instance)| instance.clone()).collect())
            .unwrap_or_default()
    }

    /// Number of values recorded for `ty`
    pub fn count_for(&self, ty: &TypeDescriptor) -> usize {
        self.by_type.get(ty).map_or(0, Vec::len)
    }

    /// Value a constructor produced earlier in this call
    pub fn cached(&self, producer: ConstructorId) -> Option<&Instance> {
        self.by_constructor.get(&producer)
    }

    /// Remember the value a constructor produced
    pub fn cache(&mut self, producer: ConstructorId, instance: Instance) {
        self.by_constructor.insert(producer, instance);
    }
}
