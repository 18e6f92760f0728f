//! Injectable parameter types
//!
//! A constructor parameter (or root field) declares what it needs through its
//! Rust type:
//!
//! | Parameter type | Request |
//! |----------------|---------|
//! | `Arc<T>` | exactly one value of `T` (concrete type or `dyn Capability`) |
//! | `Vec<Arc<T>>` | every value whose constructor output satisfies `T`, in registration order |

use std::sync::Arc;

use wireup_domain::{Error, Instance, Result, TypeDescriptor};

/// A bound argument, as handed from the resolver to an invoker
#[derive(Debug, Clone)]
pub enum Argument {
    /// Value for a scalar request
    Single(Instance),
    /// Values for a multi-binding request
    Many(Vec<Instance>),
}

/// A type that can be requested from the container
pub trait Dependency: Sized + Send + 'static {
    /// Descriptor of the request this type expresses
    fn descriptor() -> TypeDescriptor;

    /// Recover the typed value from a bound argument
    fn from_argument(argument: Argument) -> Result<Self>;
}

impl<T: ?Sized + Send + Sync + 'static> Dependency for Arc<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<T>()
    }

    fn from_argument(argument: Argument) -> Result<Self> {
        match argument {
            Argument::Single(instance) => downcast::<T>(&instance),
            Argument::Many(_) => Err(Error::type_mismatch(
                std::any::type_name::<T>(),
                "a collection of values",
            )),
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> Dependency for Vec<Arc<T>> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::all_of::<T>()
    }

    fn from_argument(argument: Argument) -> Result<Self> {
        match argument {
            Argument::Many(instances) => instances.iter().map(downcast::<T>).collect(),
            Argument::Single(instance) => Err(Error::type_mismatch(
                std::any::type_name::<Self>(),
                instance.type_name(),
            )),
        }
    }
}

fn downcast<T: ?Sized + Send + Sync + 'static>(instance: &Instance) -> Result<Arc<T>> {
    instance
        .downcast::<T>()
        .ok_or_else(|| Error::type_mismatch(std::any::type_name::<T>(), instance.type_name()))
}

/// Ordered arguments consumed one dependency at a time
pub struct ArgumentList {
    arguments: std::vec::IntoIter<Argument>,
}

impl ArgumentList {
    /// Wrap bound arguments in declaration order
    pub fn new(arguments: Vec<Argument>) -> Self {
        Self {
            arguments: arguments.into_iter(),
        }
    }

    /// Take the next argument as `D`
    pub fn take<D: Dependency>(&mut self) -> Result<D> {
        let argument = self.arguments.next().ok_or_else(|| {
            Error::type_mismatch(std::any::type_name::<D>(), "no remaining argument")
        })?;
        D::from_argument(argument)
    }
}
