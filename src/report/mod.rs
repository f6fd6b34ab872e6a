pub mod json;
pub mod md;

use crate::error::PostureError;
use crate::types::scoring::FrameworkScore;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureReport {
    pub generated_at: DateTime<Utc>,
    pub frameworks: Vec<FrameworkScore>,
}

impl PostureReport {
    pub fn new(frameworks: Vec<FrameworkScore>) -> Self {
        Self {
            generated_at: Utc::now(),
            frameworks,
        }
    }

    pub fn has_unavailable(&self) -> bool {
        self.frameworks
            .iter()
            .any(|framework| !framework.is_available())
    }
}

pub fn render(report: &PostureReport, format: OutputFormat) -> Result<String, PostureError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PostureError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
