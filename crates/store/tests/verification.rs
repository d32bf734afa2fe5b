mod common;

use common::{registry, service, tenant, user, FaultyGateway};
use skeletonkey_cache::MemoryGateway;
use skeletonkey_config::manifest::parse_skeleton_keys;
use skeletonkey_core::DomainErrorKind;
use skeletonkey_store::Registry;
use std::sync::Arc;

/// acme: `billing` available, alice/secret123 entitled to `billing`
async fn provisioned(gateway: MemoryGateway) -> Registry {
    let registry = registry(Arc::new(gateway));
    let keys =
        parse_skeleton_keys(r#"{"alice": {"password": "secret123", "services": ["billing"]}}"#)
            .unwrap();
    registry
        .provisioner()
        .provision(&tenant("acme"), &[service("billing")], &keys)
        .await
        .unwrap();
    registry
}

#[tokio::test]
async fn test_all_gates_pass() {
    let registry = provisioned(MemoryGateway::new()).await;
    let verified = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("billing"),
            &user("alice"),
            "secret123",
        )
        .await
        .unwrap();
    assert!(verified);
}

#[tokio::test]
async fn test_wrong_password_is_false_without_error() {
    let registry = provisioned(MemoryGateway::new()).await;
    let verified = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("billing"),
            &user("alice"),
            "wrong",
        )
        .await
        .unwrap();
    assert!(!verified);
}

#[tokio::test]
async fn test_unprovisioned_service_fails_entitlement_gate_first() {
    let registry = provisioned(MemoryGateway::new()).await;
    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("shipping"),
            &user("alice"),
            "secret123",
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.domain_kind(),
        Some(DomainErrorKind::SkeletonKeyServiceDoesNotExist)
    );
}

#[tokio::test]
async fn test_entitled_but_unavailable_service_fails_availability_gate() {
    let registry = provisioned(MemoryGateway::new()).await;
    registry
        .entitlements()
        .set_skeleton_key_service(&tenant("acme"), &user("alice"), &service("shipping"))
        .await
        .unwrap();

    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("shipping"),
            &user("alice"),
            "secret123",
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.domain_kind(),
        Some(DomainErrorKind::AvailableServiceDoesNotExist)
    );
    assert_eq!(
        err.to_string(),
        "available service does not exist: 'shipping'"
    );
}

#[tokio::test]
async fn test_available_but_not_entitled_fails_entitlement_gate() {
    let registry = provisioned(MemoryGateway::new()).await;
    registry
        .credentials()
        .set_skeleton_key(&tenant("acme"), &user("bob"), "hunter2")
        .await
        .unwrap();

    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("billing"),
            &user("bob"),
            "hunter2",
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.domain_kind(),
        Some(DomainErrorKind::SkeletonKeyServiceDoesNotExist)
    );
}

#[tokio::test]
async fn test_missing_credential_with_both_flags_set() {
    let registry = provisioned(MemoryGateway::new()).await;
    registry
        .entitlements()
        .set_skeleton_key_service(&tenant("acme"), &user("carol"), &service("billing"))
        .await
        .unwrap();

    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("billing"),
            &user("carol"),
            "anything",
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.domain_kind(),
        Some(DomainErrorKind::SkeletonKeyDoesNotExist)
    );
}

#[tokio::test]
async fn test_other_tenant_sees_nothing() {
    let registry = provisioned(MemoryGateway::new()).await;
    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("globex"),
            &service("billing"),
            &user("alice"),
            "secret123",
        )
        .await
        .unwrap_err();
    assert!(err.is_domain());
}

#[tokio::test]
async fn test_standalone_verify() {
    let registry = provisioned(MemoryGateway::new()).await;
    let verifier = registry.verifier();

    assert!(verifier
        .verify_skeleton_key(&tenant("acme"), &user("alice"), "secret123")
        .await
        .unwrap());
    assert!(!verifier
        .verify_skeleton_key(&tenant("acme"), &user("alice"), "secret124")
        .await
        .unwrap());

    let err = verifier
        .verify_skeleton_key(&tenant("acme"), &user("nobody"), "secret123")
        .await
        .unwrap_err();
    assert_eq!(
        err.domain_kind(),
        Some(DomainErrorKind::SkeletonKeyDoesNotExist)
    );
}

#[tokio::test]
async fn test_transport_failure_on_entitlement_read_maps_to_gate_error() {
    let gateway = MemoryGateway::new();
    provisioned(gateway.clone()).await;

    let faulty = FaultyGateway::new(gateway).failing_keys("skeleton_key_services");
    let registry = common::registry(Arc::new(faulty));

    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("billing"),
            &user("alice"),
            "secret123",
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.domain_kind(),
        Some(DomainErrorKind::SkeletonKeyServiceDoesNotExist)
    );
    let cause = std::error::Error::source(&err).expect("transport error kept as source");
    assert!(cause.to_string().contains("503"));
}

#[tokio::test]
async fn test_transport_failure_on_availability_read_maps_to_gate_error() {
    let gateway = MemoryGateway::new();
    provisioned(gateway.clone()).await;

    let faulty = FaultyGateway::new(gateway).failing_keys("available_services");
    let registry = common::registry(Arc::new(faulty));

    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("billing"),
            &user("alice"),
            "secret123",
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.domain_kind(),
        Some(DomainErrorKind::AvailableServiceDoesNotExist)
    );
}

#[tokio::test]
async fn test_transport_failure_on_credential_read_propagates() {
    let gateway = MemoryGateway::new();
    provisioned(gateway.clone()).await;

    let faulty = FaultyGateway::new(gateway).failing_keys("salted_password_hash");
    let registry = common::registry(Arc::new(faulty));

    let err = registry
        .verifier()
        .verify_skeleton_key_and_service(
            &tenant("acme"),
            &service("billing"),
            &user("alice"),
            "secret123",
        )
        .await
        .unwrap_err();
    assert!(err.is_protocol());
}
