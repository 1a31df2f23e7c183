//! Container-port extraction from image metadata.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::ContainerPort;

/// Metadata sections that may carry exposed-port declarations, in lookup
/// order.
const PORT_SECTIONS: [&str; 2] = ["Config", "ContainerConfig"];

/// Extract the exposed container ports from raw image metadata.
///
/// Port keys have the form `"<port>"` or `"<port>/<protocol>"`; the
/// protocol defaults to `tcp` when omitted and is upper-cased in the
/// result. Keys whose port segment is not an integer are skipped with a
/// warning and parsing continues. Duplicate port/protocol pairs pass
/// through unchanged.
pub fn parse_ports(image: &Value) -> Vec<ContainerPort> {
    let mut ports = Vec::new();
    let Some(spec) = exposed_ports(image) else {
        return ports;
    };

    for key in spec.keys() {
        let (port, protocol) = match key.split_once('/') {
            Some((port, protocol)) => (port, protocol),
            None => (key.as_str(), "tcp"),
        };
        match port.parse::<i32>() {
            Ok(container_port) => ports.push(ContainerPort {
                container_port,
                protocol: protocol.to_uppercase(),
            }),
            Err(_) => warn!(
                "container port {} is not a number for image {}",
                port,
                image_name(image)
            ),
        }
    }

    // Exposed ports in image metadata carry no defined order; sort lowest
    // to highest. The sort is stable, so equal ports keep input order.
    ports.sort_by_key(|port| port.container_port);
    ports
}

/// First metadata location holding a non-empty exposed-ports mapping.
fn exposed_ports(image: &Value) -> Option<&Map<String, Value>> {
    PORT_SECTIONS.iter().find_map(|section| {
        image
            .get("dockerImageMetadata")
            .and_then(|meta| meta.get(section))
            .and_then(|config| config.get("ExposedPorts"))
            .and_then(Value::as_object)
            .filter(|spec| !spec.is_empty())
    })
}

fn image_name(image: &Value) -> &str {
    image
        .get("metadata")
        .and_then(|meta| meta.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_config_over_container_config() {
        let image = json!({
            "dockerImageMetadata": {
                "Config": {"ExposedPorts": {"8080/tcp": {}}},
                "ContainerConfig": {"ExposedPorts": {"9090/tcp": {}}}
            }
        });

        let spec = exposed_ports(&image).unwrap();
        assert!(spec.contains_key("8080/tcp"));
    }

    #[test]
    fn empty_config_falls_through_to_container_config() {
        let image = json!({
            "dockerImageMetadata": {
                "Config": {"ExposedPorts": {}},
                "ContainerConfig": {"ExposedPorts": {"9090/tcp": {}}}
            }
        });

        let spec = exposed_ports(&image).unwrap();
        assert!(spec.contains_key("9090/tcp"));
    }

    #[test]
    fn missing_metadata_yields_nothing() {
        assert!(exposed_ports(&Value::Null).is_none());
        assert!(exposed_ports(&json!({"dockerImageMetadata": {}})).is_none());
    }

    #[test]
    fn image_name_falls_back_when_unresolvable() {
        assert_eq!(image_name(&Value::Null), "<unknown>");
        assert_eq!(image_name(&json!({"metadata": {"name": "ruby"}})), "ruby");
    }
}
