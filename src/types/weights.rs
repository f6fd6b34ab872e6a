use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ControlScoreWeights {
    #[serde(rename = "baseScore")]
    pub base_score: f32,
    #[serde(rename = "improvementRatio", default)]
    pub improvement_ratio: f32,
}

pub type ResourceKindWeights = HashMap<String, f32>;
pub type FrameworkControlWeights = HashMap<String, HashMap<String, ControlScoreWeights>>;

/// Static weight tables read once from the weights directory.
#[derive(Debug, Clone, Default)]
pub struct WeightTables {
    /// Keyed by lowercased kind.
    pub resource_kinds: Option<ResourceKindWeights>,
    pub frameworks: Option<FrameworkControlWeights>,
}

impl WeightTables {
    pub fn new(
        resource_kinds: Option<ResourceKindWeights>,
        frameworks: Option<FrameworkControlWeights>,
    ) -> Self {
        let resource_kinds = resource_kinds.map(|kinds| {
            kinds
                .into_iter()
                .map(|(kind, weight)| (kind.to_lowercase(), weight))
                .collect()
        });
        Self {
            resource_kinds,
            frameworks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resource_kinds.is_none() && self.frameworks.is_none()
    }

    pub fn kind_weight(&self, kind: &str) -> Option<f32> {
        self.resource_kinds
            .as_ref()
            .and_then(|kinds| kinds.get(kind).copied())
    }

    pub fn control_weights(&self, framework: &str, control_id: &str) -> Option<ControlScoreWeights> {
        self.frameworks
            .as_ref()
            .and_then(|frameworks| frameworks.get(framework))
            .and_then(|controls| controls.get(control_id).copied())
    }
}
