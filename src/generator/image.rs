//! Output image resolution.

use crate::models::AppDescriptor;

/// Reference to the image a build pipeline will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub name: String,
    pub tag: String,
    pub kind: String,
}

/// Resolve the output image for a descriptor.
///
/// An output image exists only when a build pipeline will be generated,
/// which requires a build source URL. The image is tracked as the `latest`
/// tag of an image stream named after the application.
pub fn resolve_image_spec(input: &AppDescriptor) -> Option<ImageSpec> {
    input.build_config.source_url.as_ref()?;
    Some(ImageSpec {
        name: input.name.clone(),
        tag: "latest".to_string(),
        kind: "ImageStreamTag".to_string(),
    })
}

/// Canonical `name:tag` form of an image spec.
pub fn image_ref(spec: &ImageSpec) -> String {
    format!("{}:{}", spec.name, spec.tag)
}
