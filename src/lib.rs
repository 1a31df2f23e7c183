//! appgen Library
//!
//! Transforms a normalized "new application" descriptor into the set of
//! OpenShift `v1` manifests (image stream, build pipeline, deployment,
//! service, route) needed to stand the application up. The output is ready
//! for serialization; submitting it to a cluster is a separate concern.

pub mod cli;
pub mod generator;
pub mod models;

// Re-export the public entry points for convenience
pub use generator::{AppResources, GenerateError, Generator, parse_ports};
pub use models::AppDescriptor;
