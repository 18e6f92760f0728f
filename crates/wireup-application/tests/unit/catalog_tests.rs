//! Tests for the constructor module catalog
//!
//! Declares modules in this test binary through the linkme slice, the same
//! way a downstream crate would.

use std::sync::Arc;

use wireup_application::ports::registry::{
    CONSTRUCTOR_MODULES, ModuleEntry, find_module, install_module, list_modules,
};
use wireup_application::wireup_domain::{Error, Result};
use wireup_application::{Container, Registry};

struct Clock {
    epoch: u64,
}

struct Uptime {
    clock: Arc<Clock>,
}

fn install_clock(registry: &mut Registry) -> Result<()> {
    registry.register(|| Clock { epoch: 1_700_000_000 })?;
    Ok(())
}

fn install_uptime(registry: &mut Registry) -> Result<()> {
    registry.register(|clock: Arc<Clock>| Uptime { clock })?;
    Ok(())
}

#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
static CLOCK_MODULE: ModuleEntry = ModuleEntry {
    name: "test-clock",
    description: "Fixed clock for catalog tests",
    install: install_clock,
};

#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
static UPTIME_MODULE: ModuleEntry = ModuleEntry {
    name: "test-uptime",
    description: "Uptime derived from the clock",
    install: install_uptime,
};

#[test]
fn test_linked_modules_are_listed() {
    let modules = list_modules();
    assert!(
        modules.iter().any(|(name, _)| *name == "test-clock"),
        "Clock module should be linked. Available: {modules:?}"
    );
    assert!(modules.iter().any(|(name, _)| *name == "test-uptime"));
}

#[test]
fn test_find_module_by_name() {
    let entry = find_module("test-uptime").expect("module is linked");
    assert_eq!(entry.description, "Uptime derived from the clock");
    assert!(find_module("nonexistent").is_none());
}

#[test]
fn test_install_registers_constructors() {
    let mut registry = Registry::new();
    install_module(&mut registry, "test-clock").expect("installs");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_unknown_module_lists_available() {
    let mut registry = Registry::new();
    let err = install_module(&mut registry, "nonexistent")
        .err()
        .expect("unknown module fails");

    assert!(matches!(err, Error::Registration { .. }));
    let message = err.to_string();
    assert!(message.contains("nonexistent"));
    assert!(message.contains("test-clock"));
}

#[test]
fn test_installed_modules_resolve_together() {
    let mut container = Container::new();
    container
        .install("test-uptime")
        .and_then(|c| c.install("test-clock"))
        .expect("modules install");

    let (uptime,): (Arc<Uptime>,) = container.resolve().expect("resolves");
    assert_eq!(uptime.clock.epoch, 1_700_000_000);
}
