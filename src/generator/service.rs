//! Service builder.

use crate::generator::deploymentconfig_selector;
use crate::models::{
    API_VERSION, AppDescriptor, ContainerPort, ObjectMeta, Service, ServicePort, ServiceSpec,
};

/// Build the service fronting the deployment's pods.
///
/// No derived ports means nothing to expose, so no service at all; the
/// facade relies on this when deciding whether a route can exist.
pub(crate) fn build(input: &AppDescriptor, ports: &[ContainerPort]) -> Option<Service> {
    if ports.is_empty() {
        return None;
    }

    let service_ports = ports
        .iter()
        .map(|port| ServicePort {
            port: port.container_port,
            target_port: port.container_port,
            protocol: port.protocol.clone(),
            // Same naming convention as the CLI's new-app.
            name: format!("{}-{}", port.container_port, port.protocol).to_lowercase(),
        })
        .collect();

    Some(Service {
        api_version: API_VERSION.to_string(),
        kind: "Service".to_string(),
        metadata: ObjectMeta {
            name: input.name.clone(),
            labels: input.labels.clone(),
            annotations: input.annotations.clone(),
        },
        spec: ServiceSpec {
            selector: deploymentconfig_selector(&input.name),
            ports: service_ports,
        },
    })
}
