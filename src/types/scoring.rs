use serde::Serialize;

pub type Score = f32;

/// Result of scoring one control against its evaluated resources.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlScore {
    #[serde(rename = "controlID")]
    pub control_id: String,
    pub name: String,
    pub base_score: Score,
    /// Failed weight over worst-case weight; 0 when nothing was evaluated.
    pub score: Score,
    pub raw_score: Score,
    pub worst_case: Score,
    pub improvement: Score,
    pub evaluated: usize,
    pub failed_resources: Vec<String>,
    pub scored: bool,
}

impl ControlScore {
    /// (worst-case contribution, numerator contribution) to the framework totals.
    pub fn contributions(&self) -> (Score, Score) {
        (self.worst_case, self.raw_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkScore {
    pub name: String,
    /// Percentage of the risk-weighted surface that is failing.
    pub score: Score,
    /// Percentage the score would move by if failing items were fixed.
    pub improvement: Score,
    pub wcs_score: Score,
    pub controls: Vec<ControlScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FrameworkScore {
    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}
