use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A constructed value with its static type erased.
///
/// Internally this is an `Arc<dyn Any>` around an `Arc<T>`. The extra level
/// lets `T` be unsized, so a capability view (`Arc<dyn Trait>`) and the
/// concrete value (`Arc<Impl>`) can both be stored while pointing at the same
/// allocation. Cloning an `Instance` never clones the value.
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Instance {
    /// Erase a shared value
    pub fn new<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Recover the shared value if it was erased as `Arc<T>`
    pub fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.value.downcast_ref::<Arc<T>>().cloned()
    }

    /// Name of the type the value was erased as
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .finish()
    }
}
