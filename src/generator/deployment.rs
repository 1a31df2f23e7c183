//! Deployment builder.

use crate::generator::image::{ImageSpec, image_ref};
use crate::generator::{deploymentconfig_selector, flatten_env};
use crate::models::{
    API_VERSION, AppDescriptor, Container, ContainerPort, DeploymentConfig, DeploymentConfigSpec,
    DeploymentTrigger, ImageChangeParams, ObjectMeta, ObjectReference, PodSpec, PodTemplate,
    PodTemplateMeta, TriggerType,
};

/// Build the deployment for the application's output image.
///
/// Triggers follow the descriptor flags independently, `ImageChange` before
/// `ConfigChange` when both are requested.
pub(crate) fn build(
    input: &AppDescriptor,
    image: &ImageSpec,
    ports: &[ContainerPort],
) -> DeploymentConfig {
    // Pods carry the resource labels plus the selector key.
    let mut template_labels = input.labels.clone();
    template_labels.insert("deploymentconfig".to_string(), input.name.clone());

    let container = Container {
        image: image_ref(image),
        name: input.name.clone(),
        ports: ports.to_vec(),
        env: flatten_env(&input.deployment_config.env_vars),
        resources: input
            .container
            .as_ref()
            .and_then(|overrides| overrides.resources.clone()),
    };

    let mut triggers = Vec::new();
    if input.deployment_config.deploy_on_new_image {
        triggers.push(DeploymentTrigger {
            trigger_type: TriggerType::ImageChange,
            image_change_params: Some(ImageChangeParams {
                automatic: true,
                container_names: vec![input.name.clone()],
                from: ObjectReference {
                    kind: image.kind.clone(),
                    name: image_ref(image),
                    namespace: None,
                },
            }),
        });
    }
    if input.deployment_config.deploy_on_config_change {
        triggers.push(DeploymentTrigger {
            trigger_type: TriggerType::ConfigChange,
            image_change_params: None,
        });
    }

    DeploymentConfig {
        api_version: API_VERSION.to_string(),
        kind: "DeploymentConfig".to_string(),
        metadata: ObjectMeta {
            name: input.name.clone(),
            labels: input.labels.clone(),
            annotations: input.annotations.clone(),
        },
        spec: DeploymentConfigSpec {
            replicas: input.scaling.replicas,
            selector: deploymentconfig_selector(&input.name),
            triggers,
            template: PodTemplate {
                metadata: PodTemplateMeta {
                    labels: template_labels,
                },
                spec: PodSpec {
                    containers: vec![container],
                },
            },
        },
    }
}
