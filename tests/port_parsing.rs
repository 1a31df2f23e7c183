//! Port parsing tests
//!
//! Checks extraction of container ports from raw image metadata: ordering,
//! protocol defaulting, and tolerance of malformed declarations.

use appgen::models::ContainerPort;
use appgen::parse_ports;
use serde_json::json;

fn port(container_port: i32, protocol: &str) -> ContainerPort {
    ContainerPort {
        container_port,
        protocol: protocol.to_string(),
    }
}

#[test]
fn parses_and_sorts_exposed_ports() {
    let image = json!({
        "dockerImageMetadata": {
            "Config": {
                "ExposedPorts": {"9090/tcp": {}, "8080/tcp": {}}
            }
        }
    });

    assert_eq!(
        parse_ports(&image),
        vec![port(8080, "TCP"), port(9090, "TCP")]
    );
}

#[test]
fn protocol_defaults_to_tcp() {
    let image = json!({
        "dockerImageMetadata": {
            "Config": {
                "ExposedPorts": {"8080/tcp": {}, "9090": {}}
            }
        }
    });

    assert_eq!(
        parse_ports(&image),
        vec![port(8080, "TCP"), port(9090, "TCP")]
    );
}

#[test]
fn protocol_is_upper_cased() {
    let image = json!({
        "dockerImageMetadata": {
            "Config": {
                "ExposedPorts": {"53/udp": {}}
            }
        }
    });

    assert_eq!(parse_ports(&image), vec![port(53, "UDP")]);
}

#[test]
fn non_numeric_port_is_skipped_without_failing() {
    let image = json!({
        "metadata": {"name": "bad-image"},
        "dockerImageMetadata": {
            "Config": {
                "ExposedPorts": {"abc/tcp": {}}
            }
        }
    });

    assert!(parse_ports(&image).is_empty());
}

#[test]
fn malformed_keys_do_not_abort_remaining_ports() {
    let image = json!({
        "dockerImageMetadata": {
            "Config": {
                "ExposedPorts": {"abc/tcp": {}, "8080/tcp": {}, "9090/x": {}}
            }
        }
    });

    assert_eq!(parse_ports(&image), vec![port(8080, "TCP"), port(9090, "X")]);
}

#[test]
fn equal_ports_keep_input_order() {
    let image = json!({
        "dockerImageMetadata": {
            "Config": {
                "ExposedPorts": {"53/udp": {}, "53/tcp": {}}
            }
        }
    });

    assert_eq!(parse_ports(&image), vec![port(53, "UDP"), port(53, "TCP")]);
}

#[test]
fn falls_back_to_container_config() {
    let image = json!({
        "dockerImageMetadata": {
            "ContainerConfig": {
                "ExposedPorts": {"6379/tcp": {}}
            }
        }
    });

    assert_eq!(parse_ports(&image), vec![port(6379, "TCP")]);
}

#[test]
fn empty_first_location_falls_through() {
    let image = json!({
        "dockerImageMetadata": {
            "Config": {"ExposedPorts": {}},
            "ContainerConfig": {"ExposedPorts": {"6379/tcp": {}}}
        }
    });

    assert_eq!(parse_ports(&image), vec![port(6379, "TCP")]);
}

#[test]
fn missing_metadata_yields_no_ports() {
    assert!(parse_ports(&serde_json::Value::Null).is_empty());
    assert!(parse_ports(&json!({})).is_empty());
    assert!(parse_ports(&json!({"dockerImageMetadata": {}})).is_empty());
}
