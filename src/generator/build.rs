//! Build pipeline builder.

use url::Url;

use crate::generator::image::{ImageSpec, image_ref};
use crate::generator::secret::TokenSource;
use crate::generator::{flatten_env, non_empty};
use crate::models::{
    API_VERSION, AppDescriptor, BuildConfig, BuildConfigSpec, BuildOutput, BuildSource,
    BuildStrategy, BuildTrigger, GitSource, ImageChangeTriggerParams, ObjectMeta, ObjectReference,
    SourceStrategy, TriggerType, WebhookTrigger,
};

/// Fallback git ref when neither the URL fragment nor an override names one.
const DEFAULT_GIT_REF: &str = "master";

/// Build the pipeline that turns the source repository into the output
/// image.
///
/// Triggers are appended in fixed order: a `Generic` webhook always, then
/// `GitHub`, `ImageChange`, and `ConfigChange` each only when its flag is
/// set. Both webhook triggers get their own freshly generated secret.
pub(crate) fn build(
    input: &AppDescriptor,
    image: &ImageSpec,
    tokens: &dyn TokenSource,
) -> BuildConfig {
    let mut triggers = vec![BuildTrigger {
        trigger_type: TriggerType::Generic,
        generic: Some(WebhookTrigger {
            secret: tokens.webhook_token(),
        }),
        github: None,
        image_change: None,
    }];
    if input.build_config.build_on_source_change {
        triggers.push(BuildTrigger {
            trigger_type: TriggerType::GitHub,
            generic: None,
            github: Some(WebhookTrigger {
                secret: tokens.webhook_token(),
            }),
            image_change: None,
        });
    }
    if input.build_config.build_on_image_change {
        triggers.push(BuildTrigger {
            trigger_type: TriggerType::ImageChange,
            generic: None,
            github: None,
            image_change: Some(ImageChangeTriggerParams {}),
        });
    }
    if input.build_config.build_on_config_change {
        triggers.push(BuildTrigger {
            trigger_type: TriggerType::ConfigChange,
            generic: None,
            github: None,
            image_change: None,
        });
    }

    // The user may hand us a URL whose fragment names the ref to build.
    // The facade only calls this builder once an image spec resolved,
    // which requires the source URL to be present.
    let raw_url = input.build_config.source_url.as_deref().unwrap_or_default();
    let (uri, fragment_ref) = split_source_ref(raw_url);
    let git_ref = non_empty(input.build_config.git_ref.as_deref())
        .map(str::to_string)
        .or(fragment_ref)
        .unwrap_or_else(|| DEFAULT_GIT_REF.to_string());

    BuildConfig {
        api_version: API_VERSION.to_string(),
        kind: "BuildConfig".to_string(),
        metadata: ObjectMeta {
            name: input.name.clone(),
            labels: input.labels.clone(),
            annotations: input.annotations.clone(),
        },
        spec: BuildConfigSpec {
            output: BuildOutput {
                to: ObjectReference {
                    kind: image.kind.clone(),
                    name: image_ref(image),
                    namespace: None,
                },
            },
            source: BuildSource {
                git: GitSource { git_ref, uri },
                source_type: "Git".to_string(),
                context_dir: non_empty(input.build_config.context_dir.as_deref())
                    .map(str::to_string),
            },
            strategy: BuildStrategy {
                strategy_type: "Source".to_string(),
                source_strategy: SourceStrategy {
                    from: ObjectReference {
                        kind: "ImageStreamTag".to_string(),
                        name: format!("{}:{}", input.image_name, input.image_tag),
                        namespace: Some(input.namespace.clone()),
                    },
                    env: flatten_env(&input.build_config.env_vars),
                },
            },
            triggers,
        },
    }
}

/// Split a source URL into its fragment-less form and the fragment, if any.
fn split_source_ref(raw: &str) -> (String, Option<String>) {
    match Url::parse(raw) {
        Ok(mut url) => {
            let fragment = url
                .fragment()
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_string);
            url.set_fragment(None);
            (url.into(), fragment)
        }
        // scp-style git remotes are not RFC 3986 URLs; split by hand.
        Err(_) => match raw.split_once('#') {
            Some((base, fragment)) if !fragment.is_empty() => {
                (base.to_string(), Some(fragment.to_string()))
            }
            Some((base, _)) => (base.to_string(), None),
            None => (raw.to_string(), None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use serde_json::json;

    mock! {
        Tokens {}
        impl TokenSource for Tokens {
            fn webhook_token(&self) -> String;
        }
    }

    fn descriptor() -> AppDescriptor {
        serde_json::from_value(json!({
            "name": "ruby-hello",
            "namespace": "openshift",
            "imageName": "ruby",
            "imageTag": "2.7",
            "buildConfig": {
                "sourceUrl": "https://example.com/ruby-hello.git",
                "buildOnSourceChange": true
            }
        }))
        .unwrap()
    }

    fn output_image() -> ImageSpec {
        ImageSpec {
            name: "ruby-hello".to_string(),
            tag: "latest".to_string(),
            kind: "ImageStreamTag".to_string(),
        }
    }

    #[test]
    fn split_strips_fragment_from_url() {
        let (url, fragment) = split_source_ref("https://example.com/app.git#stage");
        assert_eq!(url, "https://example.com/app.git");
        assert_eq!(fragment.as_deref(), Some("stage"));
    }

    #[test]
    fn split_without_fragment() {
        let (url, fragment) = split_source_ref("https://example.com/app.git");
        assert_eq!(url, "https://example.com/app.git");
        assert_eq!(fragment, None);
    }

    #[test]
    fn split_handles_scp_style_remotes() {
        let (url, fragment) = split_source_ref("git@example.com:team/app.git#dev");
        assert_eq!(url, "git@example.com:team/app.git");
        assert_eq!(fragment.as_deref(), Some("dev"));
    }

    #[test]
    fn each_webhook_trigger_gets_its_own_secret() {
        let tokens = {
            let mut tokens = MockTokens::new();
            let mut counter = 0u32;
            tokens.expect_webhook_token().times(2).returning(move || {
                counter += 1;
                format!("{counter:016x}")
            });
            tokens
        };

        let config = build(&descriptor(), &output_image(), &tokens);

        let secrets: Vec<_> = config
            .spec
            .triggers
            .iter()
            .filter_map(|trigger| trigger.generic.as_ref().or(trigger.github.as_ref()))
            .map(|webhook| webhook.secret.clone())
            .collect();
        assert_eq!(secrets, vec!["0000000000000001", "0000000000000002"]);
    }
}
