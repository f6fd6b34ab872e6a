use super::control::{score_control, ControlWeights};
use super::framework::aggregate;
use super::resource::ResourceWeightResolver;
use crate::config;
use crate::error::{Result, ScoreError};
use crate::types::config::PostureConfig;
use crate::types::report::{ControlReport, FrameworkReport};
use crate::types::scoring::FrameworkScore;
use crate::types::weights::WeightTables;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Scores framework reports against the weight tables it was built with.
/// Holds no per-run state, so one engine can score distinct frameworks
/// from several threads.
pub struct ScoreEngine {
    resolver: ResourceWeightResolver,
    default_improvement_ratio: f32,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(WeightTables::default(), 0.0)
    }
}

impl ScoreEngine {
    pub fn new(tables: WeightTables, default_improvement_ratio: f32) -> Self {
        Self {
            resolver: ResourceWeightResolver::new(tables),
            default_improvement_ratio,
        }
    }

    /// Loads `posture.toml` and the weight tables from `config_dir`. Without
    /// a directory the engine runs on unit weights.
    pub fn from_config_dir(config_dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = config_dir else {
            return Ok(Self::default());
        };
        let cfg = config::load_config(dir)?;
        Ok(Self::from_config(&cfg, dir))
    }

    pub fn from_config(cfg: &PostureConfig, config_dir: &Path) -> Self {
        let tables = config::load_weight_tables(&cfg.weight_paths(config_dir));
        if tables.is_empty() {
            warn!(dir = %config_dir.display(), "no weight tables loaded, using default weights");
        }
        Self::new(tables, cfg.default_improvement_ratio())
    }

    pub fn weight(&self, resource: &Value) -> f32 {
        self.resolver.weight(resource)
    }

    fn control_weights(&self, framework: &str, control: &ControlReport) -> ControlWeights {
        match self
            .resolver
            .tables()
            .control_weights(framework, &control.control_id)
        {
            Some(table) => ControlWeights {
                base_score: table.base_score,
                improvement_ratio: table.improvement_ratio,
            },
            None => ControlWeights {
                base_score: control.base_score,
                improvement_ratio: control
                    .improvement_ratio
                    .unwrap_or(self.default_improvement_ratio),
            },
        }
    }

    pub fn score_framework(
        &self,
        framework: &FrameworkReport,
    ) -> std::result::Result<FrameworkScore, ScoreError> {
        let controls = framework
            .control_reports
            .iter()
            .map(|control| {
                score_control(
                    &self.resolver,
                    control,
                    self.control_weights(&framework.name, control),
                )
            })
            .collect();
        aggregate(&framework.name, controls)
    }

    /// Scores every framework. A framework that cannot be scored is kept
    /// with score 0 and its error recorded; the rest are unaffected.
    pub fn score_all(&self, frameworks: &[FrameworkReport]) -> Vec<FrameworkScore> {
        frameworks
            .iter()
            .map(|framework| match self.score_framework(framework) {
                Ok(scored) => {
                    info!(framework = %scored.name, score = scored.score, "framework scored");
                    scored
                }
                Err(err) => {
                    let message = err.to_string();
                    warn!(framework = %framework.name, "{message}");
                    let ScoreError::ZeroWorstCase { partial, .. } = err;
                    FrameworkScore {
                        error: Some(message),
                        ..*partial
                    }
                }
            })
            .collect()
    }
}
