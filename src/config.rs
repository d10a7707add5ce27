use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use stitchgate_schema::ArgumentValues;
use stitchgate_transforms::{RemoveFieldDirectives, RemoveFieldsWithDirective, TransformPipeline};
use tracing::instrument;

/// Declarative description of the transforms to run over a schema.
///
/// ```toml
/// [[transforms]]
/// kind = "remove_fields_with_directive"
/// directive = "internal"
///
/// [[transforms]]
/// kind = "remove_field_directives"
/// directive = "deprecated"
/// args = { reason = "old" }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transforms: Vec<TransformConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformConfig {
    RemoveFieldDirectives {
        directive: String,
        #[serde(default)]
        args: ArgumentValues,
    },
    RemoveFieldsWithDirective {
        directive: String,
        #[serde(default)]
        args: ArgumentValues,
    },
}

impl Config {
    pub fn from_toml_str(config: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config)
    }

    #[instrument(err(Debug), skip(path), fields(file = %path.as_ref().display()), level = "trace")]
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'.", path.display()))?;
        let config = Self::from_toml_str(&config)
            .with_context(|| format!("Failed to parse config file '{}'.", path.display()))?;
        tracing::info!(transforms = config.transforms.len(), "Transform config loaded.");
        Ok(config)
    }

    /// Builds the configured transforms, in declaration order.
    pub fn pipeline(&self) -> TransformPipeline {
        let mut pipeline = TransformPipeline::new();
        for transform in &self.transforms {
            match transform {
                TransformConfig::RemoveFieldDirectives { directive, args } => {
                    pipeline.push(Box::new(RemoveFieldDirectives::new(directive).with_args(args.clone())));
                },
                TransformConfig::RemoveFieldsWithDirective { directive, args } => {
                    pipeline.push(Box::new(
                        RemoveFieldsWithDirective::new(directive).with_args(args.clone()),
                    ));
                },
            }
        }
        pipeline
    }
}
