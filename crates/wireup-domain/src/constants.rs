//! Domain layer constants
//!
//! Constants shared by the application and infrastructure layers.

/// Label used for constructors registered without an explicit name
pub const ANONYMOUS_CONSTRUCTOR: &str = "<anonymous>";
