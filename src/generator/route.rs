//! Route builder.

use indexmap::IndexMap;

use crate::generator::non_empty;
use crate::models::{
    API_VERSION, ObjectMeta, ObjectReference, Route, RoutePort, RouteSpec, RouteTls,
    RoutingOptions, TlsOptions, TlsTermination,
};

/// Build a route binding an external hostname to a service.
///
/// Host, path, and port selection appear only when the options provide
/// them; the TLS block only when a termination mode is set.
pub(crate) fn build(
    route_name: &str,
    service_name: &str,
    labels: IndexMap<String, String>,
    annotations: IndexMap<String, String>,
    routing: &RoutingOptions,
) -> Route {
    Route {
        api_version: API_VERSION.to_string(),
        kind: "Route".to_string(),
        metadata: ObjectMeta {
            name: route_name.to_string(),
            labels,
            annotations,
        },
        spec: RouteSpec {
            to: ObjectReference {
                kind: "Service".to_string(),
                name: service_name.to_string(),
                namespace: None,
            },
            host: non_empty(routing.host.as_deref()).map(str::to_string),
            path: non_empty(routing.path.as_deref()).map(str::to_string),
            port: routing.target_port.as_ref().map(|port| RoutePort {
                target_port: port.container_port,
            }),
            tls: routing.tls.as_ref().and_then(build_tls),
        },
    }
}

/// Populate the TLS block for the requested termination mode.
///
/// Certificate material never reaches a passthrough block, the insecure
/// edge policy is edge-only, and the destination CA is re-encrypt-only.
fn build_tls(tls: &TlsOptions) -> Option<RouteTls> {
    let termination = tls.termination?;

    let mut block = RouteTls {
        termination,
        insecure_edge_termination_policy: None,
        certificate: None,
        key: None,
        ca_certificate: None,
        destination_ca_certificate: None,
    };

    if termination == TlsTermination::Passthrough {
        return Some(block);
    }

    if termination == TlsTermination::Edge {
        block.insecure_edge_termination_policy =
            non_empty(tls.insecure_edge_termination_policy.as_deref()).map(str::to_string);
    }
    block.certificate = non_empty(tls.certificate.as_deref()).map(str::to_string);
    block.key = non_empty(tls.key.as_deref()).map(str::to_string);
    block.ca_certificate = non_empty(tls.ca_certificate.as_deref()).map(str::to_string);
    if termination == TlsTermination::Reencrypt {
        block.destination_ca_certificate =
            non_empty(tls.destination_ca_certificate.as_deref()).map(str::to_string);
    }

    Some(block)
}
