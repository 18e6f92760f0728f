//! Configuration Tests
//!
//! Tests for configuration loading, merge order and validation.

mod loader_test;
