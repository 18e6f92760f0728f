//! Unit tests for type descriptors and instances

use std::collections::HashSet;
use std::sync::Arc;
use wireup_domain::{ConstructorId, Instance, TypeDescriptor, TypeKey};

trait Greeter: Send + Sync {}
struct English;
impl Greeter for English {}

#[test]
fn test_descriptors_are_hashable_by_identity() {
    let mut seen = HashSet::new();
    seen.insert(TypeDescriptor::of::<English>());
    seen.insert(TypeDescriptor::of::<English>());
    seen.insert(TypeDescriptor::of::<dyn Greeter>());
    seen.insert(TypeDescriptor::all_of::<dyn Greeter>());
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_scalar_and_multi_share_key() {
    let scalar = TypeDescriptor::of::<dyn Greeter>();
    let multi = TypeDescriptor::all_of::<dyn Greeter>();
    assert_eq!(scalar.key(), multi.key());
    assert_eq!(multi.element(), scalar);
    assert_eq!(scalar.element(), scalar);
    assert_eq!(TypeDescriptor::scalar(TypeKey::of::<English>()), TypeDescriptor::of::<English>());
}

#[test]
fn test_descriptor_serializes_as_display_string() {
    let json = serde_json::to_string(&TypeDescriptor::all_of::<English>()).unwrap();
    assert!(json.starts_with("\"["));
    assert!(json.contains("English"));
}

#[test]
fn test_constructor_ids_order_by_position() {
    let first = ConstructorId::new(0);
    let second = ConstructorId::new(1);
    assert!(first < second);
    assert_eq!(second.position(), 1);
    assert_eq!(second.to_string(), "#1");
}

#[test]
fn test_instance_reports_erased_type() {
    let instance = Instance::new::<dyn Greeter>(Arc::new(English));
    assert!(instance.type_name().contains("Greeter"));
    assert!(instance.downcast::<dyn Greeter>().is_some());
}
