use super::PostureReport;

pub fn to_json(report: &PostureReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
