//! Use Cases
//!
//! Entry points the outer layers drive.

pub mod container;

pub use container::Container;
