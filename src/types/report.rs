use serde::Deserialize;
use serde_json::Value;

/// Any cluster or external object, as produced by the evaluation engine.
pub type Resource = Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlReport {
    #[serde(rename = "controlID", alias = "controlId", alias = "id")]
    pub control_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_base_score")]
    pub base_score: f32,
    pub improvement_ratio: Option<f32>,
    #[serde(default, alias = "allEvaluatedResources")]
    pub all_resources: Vec<Resource>,
    #[serde(default)]
    pub failed_resources: Vec<Resource>,
}

fn default_base_score() -> f32 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkReport {
    pub name: String,
    #[serde(default, alias = "controls")]
    pub control_reports: Vec<ControlReport>,
}

/// Input files hold either a single framework report or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReportInput {
    Many(Vec<FrameworkReport>),
    One(FrameworkReport),
}

impl ReportInput {
    pub fn into_reports(self) -> Vec<FrameworkReport> {
        match self {
            Self::Many(reports) => reports,
            Self::One(report) => vec![report],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_framework_report() {
        let input: ReportInput = serde_json::from_str(
            r#"{
                "name": "NSA",
                "controlReports": [
                    {
                        "controlID": "C-0017",
                        "name": "Immutable container filesystem",
                        "baseScore": 3,
                        "allResources": [{"kind": "Pod"}],
                        "failedResources": []
                    }
                ]
            }"#,
        )
        .expect("report should parse");

        let reports = input.into_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].control_reports[0].control_id, "C-0017");
        assert_eq!(reports[0].control_reports[0].base_score, 3.0);
        assert!(reports[0].control_reports[0].improvement_ratio.is_none());
    }

    #[test]
    fn parse_framework_list_with_defaults() {
        let input: ReportInput =
            serde_json::from_str(r#"[{"name": "MITRE", "controls": [{"controlID": "C-1"}]}, {"name": "NSA"}]"#)
                .expect("report list should parse");

        let reports = input.into_reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].control_reports[0].base_score, 1.0);
        assert!(reports[0].control_reports[0].all_resources.is_empty());
        assert!(reports[1].control_reports.is_empty());
    }
}
