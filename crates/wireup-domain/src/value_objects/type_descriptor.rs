use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime identity of a type.
///
/// Wraps a [`TypeId`] together with the compiler-provided type name used in
/// error messages. Equality and hashing only look at the `TypeId`; the name is
/// informational. Unsized types such as `dyn Trait` have a key too, which is
/// how capabilities are requested.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying `TypeId`
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type as it is requested by a constructor parameter or root field, or as
/// it is produced by a constructor.
///
/// A descriptor is either scalar (`T`, "exactly one value") or multi-binding
/// (`[T]`, "every value whose producer satisfies `T`"). The element of a
/// multi-binding descriptor is always the scalar descriptor of the same key,
/// so nested collections cannot be expressed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    key: TypeKey,
    multi: bool,
}

impl TypeDescriptor {
    /// Scalar descriptor of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::scalar(TypeKey::of::<T>())
    }

    /// Multi-binding descriptor collecting every implementation of `T`
    pub fn all_of<T: ?Sized + 'static>() -> Self {
        Self::multi(TypeKey::of::<T>())
    }

    /// Scalar descriptor for an existing key
    pub fn scalar(key: TypeKey) -> Self {
        Self { key, multi: false }
    }

    /// Multi-binding descriptor for an existing key
    pub fn multi(key: TypeKey) -> Self {
        Self { key, multi: true }
    }

    /// Whether this descriptor requests all implementations
    pub fn is_multi(&self) -> bool {
        self.multi
    }

    /// Scalar form of this descriptor.
    ///
    /// For a scalar descriptor this is the descriptor itself; for `[T]` it is `T`.
    pub fn element(&self) -> TypeDescriptor {
        Self::scalar(self.key)
    }

    /// Key of the (element) type
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Type name of the (element) type
    pub fn name(&self) -> &'static str {
        self.key.name
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multi {
            write!(f, "[{}]", self.key.name)
        } else {
            f.write_str(self.key.name)
        }
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
