//! Route builder tests
//!
//! Checks the standalone route entry point and the TLS termination table:
//! which fields surface for passthrough, edge, and re-encrypt policies.

use appgen::generator::Generator;
use appgen::models::{ContainerPort, RoutingOptions, TlsOptions, TlsTermination};
use indexmap::IndexMap;
use serde_json::json;

fn labels() -> IndexMap<String, String> {
    IndexMap::from([("app".to_string(), "frontend".to_string())])
}

fn tls(options: TlsOptions) -> RoutingOptions {
    RoutingOptions {
        tls: Some(options),
        ..RoutingOptions::default()
    }
}

#[test]
fn route_targets_the_named_service() {
    let route = Generator::new().create_route(
        "frontend",
        "frontend-svc",
        labels(),
        &RoutingOptions::default(),
    );

    assert_eq!(route.api_version, "v1");
    assert_eq!(route.kind, "Route");
    assert_eq!(route.metadata.name, "frontend");
    assert_eq!(route.spec.to.kind, "Service");
    assert_eq!(route.spec.to.name, "frontend-svc");
    assert_eq!(route.metadata.labels.get("app"), Some(&"frontend".to_string()));
    assert!(route.metadata.annotations.is_empty());
}

#[test]
fn host_and_path_included_only_when_provided() {
    let bare = Generator::new().create_route(
        "frontend",
        "frontend",
        labels(),
        &RoutingOptions::default(),
    );
    assert_eq!(bare.spec.host, None);
    assert_eq!(bare.spec.path, None);

    let options = RoutingOptions {
        host: Some("www.example.com".to_string()),
        path: Some("/shop".to_string()),
        ..RoutingOptions::default()
    };
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);
    assert_eq!(route.spec.host.as_deref(), Some("www.example.com"));
    assert_eq!(route.spec.path.as_deref(), Some("/shop"));
}

#[test]
fn empty_host_counts_as_absent() {
    let options = RoutingOptions {
        host: Some(String::new()),
        ..RoutingOptions::default()
    };
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);
    assert_eq!(route.spec.host, None);
}

#[test]
fn target_port_picks_the_container_port() {
    let options = RoutingOptions {
        target_port: Some(ContainerPort {
            container_port: 8443,
            protocol: "TCP".to_string(),
        }),
        ..RoutingOptions::default()
    };
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);

    assert_eq!(route.spec.port.unwrap().target_port, 8443);
}

#[test]
fn tls_without_termination_emits_no_block() {
    let options = tls(TlsOptions {
        certificate: Some("CERT".to_string()),
        ..TlsOptions::default()
    });
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);

    assert!(route.spec.tls.is_none());
}

#[test]
fn passthrough_never_carries_certificates() {
    let options = tls(TlsOptions {
        termination: Some(TlsTermination::Passthrough),
        certificate: Some("CERT".to_string()),
        key: Some("KEY".to_string()),
        ca_certificate: Some("CA".to_string()),
        destination_ca_certificate: Some("DEST".to_string()),
        insecure_edge_termination_policy: Some("Redirect".to_string()),
    });
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);

    let block = serde_json::to_value(route.spec.tls.unwrap()).unwrap();
    assert_eq!(block, json!({"termination": "passthrough"}));
}

#[test]
fn edge_includes_policy_and_certificates_independently() {
    let options = tls(TlsOptions {
        termination: Some(TlsTermination::Edge),
        insecure_edge_termination_policy: Some("Redirect".to_string()),
        certificate: Some("CERT".to_string()),
        key: Some("KEY".to_string()),
        ca_certificate: Some("CA".to_string()),
        ..TlsOptions::default()
    });
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);

    let block = serde_json::to_value(route.spec.tls.unwrap()).unwrap();
    assert_eq!(
        block,
        json!({
            "termination": "edge",
            "insecureEdgeTerminationPolicy": "Redirect",
            "certificate": "CERT",
            "key": "KEY",
            "caCertificate": "CA"
        })
    );
}

#[test]
fn edge_fields_are_each_optional() {
    let options = tls(TlsOptions {
        termination: Some(TlsTermination::Edge),
        key: Some("KEY".to_string()),
        ..TlsOptions::default()
    });
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);

    let block = serde_json::to_value(route.spec.tls.unwrap()).unwrap();
    assert_eq!(block, json!({"termination": "edge", "key": "KEY"}));
}

#[test]
fn destination_ca_is_reencrypt_only() {
    let options = tls(TlsOptions {
        termination: Some(TlsTermination::Edge),
        destination_ca_certificate: Some("DEST".to_string()),
        ..TlsOptions::default()
    });
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);

    let block = route.spec.tls.unwrap();
    assert_eq!(block.destination_ca_certificate, None);
}

#[test]
fn reencrypt_includes_destination_ca_but_no_edge_policy() {
    let options = tls(TlsOptions {
        termination: Some(TlsTermination::Reencrypt),
        insecure_edge_termination_policy: Some("Redirect".to_string()),
        certificate: Some("CERT".to_string()),
        key: Some("KEY".to_string()),
        ca_certificate: Some("CA".to_string()),
        destination_ca_certificate: Some("DEST".to_string()),
    });
    let route = Generator::new().create_route("frontend", "frontend", labels(), &options);

    let block = serde_json::to_value(route.spec.tls.unwrap()).unwrap();
    assert_eq!(
        block,
        json!({
            "termination": "reencrypt",
            "certificate": "CERT",
            "key": "KEY",
            "caCertificate": "CA",
            "destinationCACertificate": "DEST"
        })
    );
}
