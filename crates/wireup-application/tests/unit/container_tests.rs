//! Tests for the `Container` use case

use std::sync::Arc;
use std::thread;

use wireup_application::wireup_domain::Error;
use wireup_application::{Container, root};

struct Settings {
    name: String,
}

struct Service {
    settings: Arc<Settings>,
}

root! {
    /// Application root used by these tests
    pub struct App {
        pub service: Arc<Service>,
        pub settings: Arc<Settings>,
    }
}

fn container() -> Container {
    let mut container = Container::new();
    container
        .register(|| Settings {
            name: "wireup".to_string(),
        })
        .and_then(|c| c.register(|settings: Arc<Settings>| Service { settings }))
        .expect("constructors register");
    container
}

#[test]
fn test_container_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Container>();
}

#[test]
fn test_struct_root_resolves() {
    let app: App = container().resolve().expect("resolves");
    assert_eq!(app.service.settings.name, "wireup");
    assert!(Arc::ptr_eq(&app.service.settings, &app.settings));
}

#[test]
fn test_concurrent_calls_have_private_values() {
    let container = container();

    let apps: Vec<App> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| container.resolve::<App>()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread completes"))
            .collect::<Result<_, Error>>()
    })
    .expect("every call resolves");

    assert_eq!(apps.len(), 4);
    assert!(!Arc::ptr_eq(&apps[0].settings, &apps[1].settings));
}

#[test]
fn test_report_lists_invocations_in_order() {
    let (_, report) = container()
        .resolve_with_report::<App>()
        .expect("resolves");

    let rendered = report.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("  1. "));
    assert!(lines[0].ends_with("Settings"));
    assert!(lines[1].ends_with("Service"));

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["invocations"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_failed_call_leaves_container_usable() {
    let container = container();
    let failed = container.resolve::<(Arc<String>,)>();
    assert!(failed.is_err());

    let app: App = container.resolve().expect("container still resolves");
    assert_eq!(app.settings.name, "wireup");
}

#[test]
fn test_registry_is_inspectable() {
    let container = container();
    assert_eq!(container.registry().len(), 2);
    let names: Vec<String> = container
        .registry()
        .iter()
        .map(|constructor| constructor.produces().to_string())
        .collect();
    assert!(names[0].ends_with("Settings"));
    assert!(names[1].ends_with("Service"));
}
