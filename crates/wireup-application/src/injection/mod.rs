//! Typed Injection Surface
//!
//! Bridges ordinary Rust functions and structs to the type-erased engine:
//! parameter types become requests, return types become produced types and
//! roots become lists of requests.

pub mod constructor;
pub mod dependency;
pub mod root;

pub use constructor::{ConstructorSpec, IntoConstructor, Invoker};
pub use dependency::{Argument, ArgumentList, Dependency};
pub use root::Root;
