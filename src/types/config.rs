use crate::error::PostureError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_RESOURCE_FILE: &str = "resourcesdict.json";
pub const DEFAULT_FRAMEWORK_FILE: &str = "frameworkdict.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostureConfig {
    pub weights: Option<WeightsConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    pub dir: Option<String>,
    #[serde(default = "default_resource_file")]
    pub resource_file: String,
    #[serde(default = "default_framework_file")]
    pub framework_file: String,
}

fn default_resource_file() -> String {
    DEFAULT_RESOURCE_FILE.to_string()
}

fn default_framework_file() -> String {
    DEFAULT_FRAMEWORK_FILE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub default_improvement_ratio: Option<f32>,
}

/// Where the two weight tables live once the config is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightPaths {
    pub resource_file: PathBuf,
    pub framework_file: PathBuf,
}

impl PostureConfig {
    pub fn default_improvement_ratio(&self) -> f32 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.default_improvement_ratio)
            .unwrap_or(0.0)
    }

    pub fn weight_paths(&self, config_dir: &Path) -> WeightPaths {
        let (dir, resource_file, framework_file) = match &self.weights {
            Some(weights) => (
                weights
                    .dir
                    .as_ref()
                    .map(|dir| config_dir.join(dir))
                    .unwrap_or_else(|| config_dir.to_path_buf()),
                weights.resource_file.as_str(),
                weights.framework_file.as_str(),
            ),
            None => (
                config_dir.to_path_buf(),
                DEFAULT_RESOURCE_FILE,
                DEFAULT_FRAMEWORK_FILE,
            ),
        };
        WeightPaths {
            resource_file: dir.join(resource_file),
            framework_file: dir.join(framework_file),
        }
    }

    pub fn validate(&self) -> Result<(), PostureError> {
        if let Some(weights) = &self.weights {
            for (key, value) in [
                ("resource_file", &weights.resource_file),
                ("framework_file", &weights.framework_file),
            ] {
                if value.trim().is_empty() {
                    return Err(PostureError::ConfigParse(format!(
                        "weights.{key} must be a non-empty file name"
                    )));
                }
            }
        }

        if let Some(ratio) = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.default_improvement_ratio)
        {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(PostureError::ConfigParse(format!(
                    "scoring.default_improvement_ratio must be a non-negative number (found {ratio})"
                )));
            }
        }

        Ok(())
    }
}
