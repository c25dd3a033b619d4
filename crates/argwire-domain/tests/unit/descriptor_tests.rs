//! Unit tests for callable descriptors

use argwire_domain::{CallableDescriptor, TypeDescriptor, TypeKind};

#[test]
fn test_fixed_count_excludes_receiver_and_variadic() {
    let descriptor = CallableDescriptor::builder()
        .receiver(TypeDescriptor::bean("Server"))
        .param(TypeDescriptor::value("String"))
        .param(TypeDescriptor::value("u16"))
        .variadic(TypeDescriptor::value("i64"))
        .returns_error()
        .build();

    assert_eq!(descriptor.params().len(), 4);
    assert_eq!(descriptor.fixed_count(), 2);
    assert!(descriptor.is_variadic());
    assert!(descriptor.has_receiver());
    assert_eq!(descriptor.receiver_type().map(|t| t.name()), Some("Server"));
    assert_eq!(descriptor.param_type(0).map(|t| t.name()), Some("String"));
    assert_eq!(descriptor.param_type(1).map(|t| t.name()), Some("u16"));
    assert!(descriptor.param_type(2).is_none());
    assert_eq!(descriptor.variadic_type().map(|t| t.name()), Some("i64"));
}

#[test]
fn test_result_count_includes_error_slot() {
    let descriptor = CallableDescriptor::builder()
        .returns(TypeDescriptor::bean("Db"))
        .returns_error()
        .build();
    assert_eq!(descriptor.results().len(), 1);
    assert_eq!(descriptor.result_count(), 2);
    assert!(descriptor.returns_error());
}

#[test]
fn test_empty_descriptor() {
    let descriptor = CallableDescriptor::builder().build();
    assert_eq!(descriptor.fixed_count(), 0);
    assert_eq!(descriptor.result_count(), 0);
    assert!(descriptor.variadic_type().is_none());
    assert!(descriptor.receiver_type().is_none());
}

#[test]
fn test_type_descriptor_kinds() {
    assert_eq!(TypeDescriptor::value_of::<String>().kind(), TypeKind::Value);
    assert!(TypeDescriptor::bean_of::<std::sync::Mutex<u8>>().is_bean());
    assert_eq!(
        TypeDescriptor::value_of::<String>().name(),
        std::any::type_name::<String>()
    );
}

#[test]
fn test_deserialize_rejects_flags_without_parameters() {
    let json = r#"{"params":[],"variadic":true,"receiver":false,"results":[],"returns_error":false}"#;
    let error = serde_json::from_str::<CallableDescriptor>(json).unwrap_err();
    assert!(error.to_string().contains("invalid callable descriptor"));

    let json = r#"{"params":[{"name":"Server","kind":"bean"}],"variadic":true,"receiver":true}"#;
    assert!(serde_json::from_str::<CallableDescriptor>(json).is_err());
}

#[test]
fn test_deserialize_accepts_builder_output() {
    let descriptor = CallableDescriptor::builder()
        .receiver(TypeDescriptor::bean("Server"))
        .param(TypeDescriptor::value("String"))
        .variadic(TypeDescriptor::value("i64"))
        .returns_error()
        .build();

    let json = serde_json::to_string(&descriptor).unwrap();
    let decoded: CallableDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, descriptor);
    assert_eq!(decoded.fixed_count(), 1);
}
