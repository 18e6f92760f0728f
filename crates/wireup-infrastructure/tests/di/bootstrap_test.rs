//! Bootstrap Tests
//!
//! Declares catalog modules in this test binary so bootstrap has something to
//! install.

use std::sync::Arc;

use wireup_application::Registry;
use wireup_application::ports::registry::{CONSTRUCTOR_MODULES, ModuleEntry};
use wireup_domain::error::{Error, Result};
use wireup_infrastructure::config::{AppConfig, ContainerConfig};
use wireup_infrastructure::di::{build_container, selected_modules};

struct Settings {
    name: &'static str,
}

struct Service {
    settings: Arc<Settings>,
}

fn install_settings(registry: &mut Registry) -> Result<()> {
    registry.register(|| Settings { name: "bootstrap" })?;
    Ok(())
}

fn install_service(registry: &mut Registry) -> Result<()> {
    registry.register(|settings: Arc<Settings>| Service { settings })?;
    Ok(())
}

#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
static SETTINGS_MODULE: ModuleEntry = ModuleEntry {
    name: "settings",
    description: "Static settings",
    install: install_settings,
};

#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
static SERVICE_MODULE: ModuleEntry = ModuleEntry {
    name: "service",
    description: "Service built from settings",
    install: install_service,
};

fn config_with(modules: &[&str]) -> AppConfig {
    AppConfig {
        container: ContainerConfig {
            modules: modules.iter().map(ToString::to_string).collect(),
            report: false,
        },
        ..AppConfig::default()
    }
}

#[test]
fn test_empty_selection_installs_every_linked_module() {
    let selected = selected_modules(&AppConfig::default());
    assert!(selected.contains(&"settings".to_string()));
    assert!(selected.contains(&"service".to_string()));

    let container = build_container(&AppConfig::default()).expect("bootstraps");
    let (service,): (Arc<Service>,) = container.resolve().expect("resolves");
    assert_eq!(service.settings.name, "bootstrap");
}

#[test]
fn test_explicit_selection_is_honoured() {
    let container = build_container(&config_with(&["settings"])).expect("bootstraps");
    assert_eq!(container.registry().len(), 1);

    let result = container.resolve::<(Arc<Service>,)>();
    assert!(matches!(result, Err(Error::MissingDependency { .. })));
}

#[test]
fn test_unknown_module_fails_bootstrap() {
    let err = build_container(&config_with(&["settings", "telemetry"]))
        .err()
        .expect("unknown module fails");
    assert!(matches!(err, Error::Registration { .. }));
    assert!(err.to_string().contains("telemetry"));
}
