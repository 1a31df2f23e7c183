//! Data Model Layer
//!
//! Structure:
//! - `descriptor.rs` - The normalized application descriptor consumed by generation
//! - `manifest.rs` - Generated manifest types matching the `v1` wire shapes
//! - `mod.rs` - Public API re-exports

pub mod descriptor;
pub mod manifest;

pub use descriptor::{
    AppDescriptor, BuildOptions, ContainerOverrides, DeploymentOptions, RoutingOptions,
    ScalingOptions, TlsOptions,
};
pub use manifest::{
    API_VERSION, BuildConfig, BuildConfigSpec, BuildOutput, BuildSource, BuildStrategy,
    BuildTrigger, Container, ContainerPort, DeploymentConfig, DeploymentConfigSpec,
    DeploymentTrigger, EnvVar, GitSource, ImageChangeParams, ImageChangeTriggerParams,
    ImageStream, ObjectMeta, ObjectReference, PodSpec, PodTemplate, PodTemplateMeta, Route,
    RoutePort, RouteSpec, RouteTls, Service, ServicePort, ServiceSpec, SourceStrategy,
    TlsTermination, TriggerType, WebhookTrigger,
};
