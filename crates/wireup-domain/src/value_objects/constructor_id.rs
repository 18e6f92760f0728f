use serde::Serialize;
use std::fmt;

/// Identity of a registered constructor.
///
/// Assigned by the registry from the constructor's registration position, so
/// ids of one registry are dense and ordered. Two constructors with identical
/// signatures still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ConstructorId(usize);

impl ConstructorId {
    /// Id for the given registration position
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Registration position
    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ConstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
