//! The normalized application descriptor.
//!
//! The descriptor is the sole input to generation: whatever collected the
//! application parameters (a form, a config file) normalizes them into this
//! shape, and generation reads nothing else. Wire names are camelCase.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::manifest::{ContainerPort, TlsTermination};

/// A normalized "new application" request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppDescriptor {
    /// Base name for every generated resource.
    pub name: String,

    /// Raw image metadata, searched for exposed-port declarations.
    #[serde(default)]
    pub image: Value,

    /// Labels stamped onto every generated resource.
    ///
    /// Generation injects `app = <name>` here before building anything.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub labels: IndexMap<String, String>,

    /// Annotations stamped onto every generated resource.
    ///
    /// Generation injects the generated-by marker here.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub annotations: IndexMap<String, String>,

    #[serde(default)]
    pub build_config: BuildOptions,

    #[serde(default)]
    pub deployment_config: DeploymentOptions,

    #[serde(default)]
    pub scaling: ScalingOptions,

    /// Optional container overrides, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerOverrides>,

    #[serde(default)]
    pub routing: RoutingOptions,

    /// Namespace holding the builder image.
    pub namespace: String,

    /// Builder image name.
    pub image_name: String,

    /// Builder image tag.
    pub image_tag: String,
}

/// Build pipeline options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Git URL to build from; may embed a `#fragment` naming the ref.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Explicit ref override; wins over any URL fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,

    /// Subdirectory of the repository to build from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<String>,

    /// Build-time environment variables.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env_vars: IndexMap<String, String>,

    /// Rebuild when the source repository changes (GitHub webhook).
    #[serde(default)]
    pub build_on_source_change: bool,

    /// Rebuild when the builder image changes.
    #[serde(default)]
    pub build_on_image_change: bool,

    /// Rebuild when the build configuration changes.
    #[serde(default)]
    pub build_on_config_change: bool,
}

/// Deployment options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentOptions {
    /// Runtime environment variables.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env_vars: IndexMap<String, String>,

    /// Redeploy when a new output image is available.
    #[serde(default)]
    pub deploy_on_new_image: bool,

    /// Redeploy when the deployment configuration changes.
    #[serde(default)]
    pub deploy_on_config_change: bool,
}

/// Replica scaling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScalingOptions {
    #[serde(default = "default_replicas")]
    pub replicas: u32,
}

impl Default for ScalingOptions {
    fn default() -> Self {
        Self {
            replicas: default_replicas(),
        }
    }
}

fn default_replicas() -> u32 {
    1
}

/// Container-level overrides forwarded into the pod template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOverrides {
    /// Compute resource requests/limits, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Value>,
}

/// External routing options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutingOptions {
    /// Whether full generation should emit a route at all.
    #[serde(default)]
    pub include: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Container port the route should address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<ContainerPort>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsOptions>,
}

/// Requested TLS policy for a route.
///
/// Which fields make it into the generated route depends on the termination
/// mode; see the route builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TlsOptions {
    /// Termination mode; without one, no TLS block is emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination: Option<TlsTermination>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_edge_termination_policy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_certificate: Option<String>,

    /// CA used to validate the pod endpoint; only meaningful for re-encrypt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_ca_certificate: Option<String>,
}
