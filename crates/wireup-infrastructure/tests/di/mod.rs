//! Container Bootstrap Tests

mod bootstrap_test;
