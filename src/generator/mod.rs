//! Application manifest generation.
//!
//! Turns a normalized [`AppDescriptor`] into the coherent set of `v1`
//! manifests needed to build, deploy, and expose an application. The
//! transformation is synchronous, pure, and keeps no state between calls;
//! the only side effect is a diagnostic warning for malformed port
//! declarations in the image metadata.
//!
//! Public surface: [`Generator`] (`generate`, `create_route`),
//! [`parse_ports`], the [`TokenSource`] seam, and [`GenerateError`].
//! The per-kind builders are private to this module.

mod build;
mod deployment;
mod image;
mod image_stream;
mod ports;
mod route;
mod secret;
mod service;

pub use image::{ImageSpec, image_ref, resolve_image_spec};
pub use ports::parse_ports;
pub use secret::{TokenSource, UuidTokenSource};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    AppDescriptor, BuildConfig, DeploymentConfig, EnvVar, ImageStream, Route, RoutingOptions,
    Service,
};

/// Annotation key marking generated resources.
pub const GENERATED_BY_ANNOTATION: &str = "openshift.io/generated-by";

/// Annotation value identifying this generator.
pub const GENERATOR_NAME: &str = "appgen";

/// Errors from structural precondition violations in the descriptor.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Without a build source URL there is no output image for the build
    /// and deployment manifests to reference.
    #[error("application {name:?} has no build source URL to resolve an output image from")]
    MissingSourceUrl { name: String },
}

/// The generated manifest set.
///
/// `service` is present iff at least one container port was derived from
/// the image metadata; `route` is present iff `service` is present and the
/// descriptor opted into routing. A returned set is always internally
/// consistent - partial sets are never produced.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppResources {
    pub image_stream: ImageStream,
    pub build_config: BuildConfig,
    pub deployment_config: DeploymentConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

impl AppResources {
    /// The manifests in submission order, as loose JSON values.
    pub fn manifests(&self) -> serde_json::Result<Vec<serde_json::Value>> {
        let mut items = vec![
            serde_json::to_value(&self.image_stream)?,
            serde_json::to_value(&self.build_config)?,
            serde_json::to_value(&self.deployment_config)?,
        ];
        if let Some(service) = &self.service {
            items.push(serde_json::to_value(service)?);
        }
        if let Some(route) = &self.route {
            items.push(serde_json::to_value(route)?);
        }
        Ok(items)
    }
}

/// The generation facade.
///
/// Stateless apart from the injected token source; one `generate` call
/// consumes one descriptor and produces one manifest set.
pub struct Generator {
    tokens: Box<dyn TokenSource>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// A generator backed by the default [`UuidTokenSource`].
    pub fn new() -> Self {
        Self {
            tokens: Box::new(UuidTokenSource),
        }
    }

    /// A generator with a caller-supplied webhook token source.
    pub fn with_token_source(tokens: Box<dyn TokenSource>) -> Self {
        Self { tokens }
    }

    /// Generate the full manifest set for a descriptor.
    ///
    /// The descriptor's labels and annotations are augmented in place
    /// (`app = <name>` and the generated-by marker); every manifest carries
    /// the augmented maps. Fails fast when no build source URL is present,
    /// since the deployment must reference the build's output image.
    pub fn generate(&self, input: &mut AppDescriptor) -> Result<AppResources, GenerateError> {
        let ports = ports::parse_ports(&input.image);

        input.labels.insert("app".to_string(), input.name.clone());
        input.annotations.insert(
            GENERATED_BY_ANNOTATION.to_string(),
            GENERATOR_NAME.to_string(),
        );

        let image = resolve_image_spec(input).ok_or_else(|| GenerateError::MissingSourceUrl {
            name: input.name.clone(),
        })?;

        let service = service::build(input, &ports);
        // Only a reachable service is worth routing to.
        let route = match &service {
            Some(service) if input.routing.include => Some(route::build(
                &input.name,
                &service.metadata.name,
                input.labels.clone(),
                input.annotations.clone(),
                &input.routing,
            )),
            _ => None,
        };

        Ok(AppResources {
            image_stream: image_stream::build(input),
            build_config: build::build(input, &image, self.tokens.as_ref()),
            deployment_config: deployment::build(input, &image, &ports),
            service,
            route,
        })
    }

    /// Create a route against an existing service, outside full generation.
    ///
    /// The caller supplies the labels; no annotations are attached. Unlike
    /// the `generate` path there is no opt-in flag to honor - asking for a
    /// route is the opt-in.
    pub fn create_route(
        &self,
        route_name: &str,
        service_name: &str,
        labels: IndexMap<String, String>,
        options: &RoutingOptions,
    ) -> Route {
        route::build(route_name, service_name, labels, IndexMap::new(), options)
    }
}

/// Flatten an environment-variable mapping into name/value pairs, keeping
/// map insertion order.
pub(crate) fn flatten_env(vars: &IndexMap<String, String>) -> Vec<EnvVar> {
    vars.iter()
        .map(|(name, value)| EnvVar {
            name: name.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Selector shared by the deployment and its service.
pub(crate) fn deploymentconfig_selector(name: &str) -> IndexMap<String, String> {
    IndexMap::from([("deploymentconfig".to_string(), name.to_string())])
}

/// Optional string inputs treat empty the same as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
