//! CLI command handlers

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::generator::Generator;
use crate::models::{API_VERSION, AppDescriptor, RoutingOptions};

/// Output serialization formats.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// YAML documents separated by `---`
    Yaml,
    /// A single `v1` List object
    Json,
}

/// Handle the `generate` subcommand.
pub fn handle_generate(file: &Path, output: OutputFormat) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read descriptor {}", file.display()))?;
    // YAML is a superset of JSON, so one parser covers both input formats
    let mut descriptor: AppDescriptor = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse descriptor {}", file.display()))?;

    let resources = Generator::new()
        .generate(&mut descriptor)
        .context("Failed to generate application resources")?;
    let manifests = resources
        .manifests()
        .context("Failed to serialize generated resources")?;

    tracing::debug!(
        "Generated {} manifests for application {}",
        manifests.len(),
        descriptor.name
    );

    print_manifests(&manifests, output)
}

/// Standalone route request: naming and labels plus the routing options
/// inline.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteRequest {
    /// Route name, and the service name unless one is given
    name: String,
    /// Service the route points at
    #[serde(default)]
    service: Option<String>,
    #[serde(default)]
    labels: IndexMap<String, String>,
    #[serde(flatten)]
    routing: RoutingOptions,
}

/// Handle the `route` subcommand.
pub fn handle_route(file: &Path, output: OutputFormat) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read route request {}", file.display()))?;
    let request: RouteRequest = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse route request {}", file.display()))?;

    let RouteRequest {
        name,
        service,
        labels,
        routing,
    } = request;
    let service_name = service.unwrap_or_else(|| name.clone());

    let route = Generator::new().create_route(&name, &service_name, labels, &routing);
    let manifest = serde_json::to_value(&route).context("Failed to serialize route")?;

    print_manifests(&[manifest], output)
}

fn print_manifests(manifests: &[serde_json::Value], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Yaml => {
            for manifest in manifests {
                let yaml = serde_yaml::to_string(manifest)
                    .context("Failed to serialize manifest as YAML")?;
                println!("---");
                print!("{}", yaml);
            }
        }
        OutputFormat::Json => {
            let list = serde_json::json!({
                "apiVersion": API_VERSION,
                "kind": "List",
                "items": manifests,
            });
            let rendered =
                serde_json::to_string_pretty(&list).context("Failed to serialize manifest list")?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
