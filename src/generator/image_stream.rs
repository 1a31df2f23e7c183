//! Image stream builder.

use crate::models::{API_VERSION, AppDescriptor, ImageStream, ObjectMeta};

/// A minimal named stream for the build pipeline to push images into.
pub(crate) fn build(input: &AppDescriptor) -> ImageStream {
    ImageStream {
        api_version: API_VERSION.to_string(),
        kind: "ImageStream".to_string(),
        metadata: ObjectMeta {
            name: input.name.clone(),
            labels: input.labels.clone(),
            annotations: input.annotations.clone(),
        },
    }
}
