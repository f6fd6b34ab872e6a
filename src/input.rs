use crate::error::{PostureError, Result};
use crate::types::report::{FrameworkReport, ReportInput, Resource};
use std::path::Path;

pub fn load_reports(path: &Path) -> Result<Vec<FrameworkReport>> {
    let content = read_input(path)?;
    let input: ReportInput = serde_json::from_str(&content)
        .map_err(|e| PostureError::InputParse(format!("{}: {}", path.display(), e)))?;
    Ok(input.into_reports())
}

pub fn load_resources(path: &Path) -> Result<Vec<Resource>> {
    let content = read_input(path)?;
    let value: Resource = serde_json::from_str(&content)
        .map_err(|e| PostureError::InputParse(format!("{}: {}", path.display(), e)))?;
    Ok(match value {
        Resource::Array(resources) => resources,
        resource => vec![resource],
    })
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PostureError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
