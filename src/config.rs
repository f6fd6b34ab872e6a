use crate::error::{PostureError, Result};
use crate::types::config::{PostureConfig, WeightPaths};
use crate::types::weights::{FrameworkControlWeights, ResourceKindWeights, WeightTables};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILE: &str = "posture.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".posture/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/posture/config.toml";

pub fn load_config(config_dir: &Path) -> Result<PostureConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(config_dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    config_dir: &Path,
    global_path: Option<&Path>,
) -> Result<PostureConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &config_dir.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &config_dir.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PostureConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PostureError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PostureError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Reads both weight tables. Never fails: a missing or broken table is
/// logged and left out, and scoring falls back to unit weights.
pub fn load_weight_tables(paths: &WeightPaths) -> WeightTables {
    let resource_kinds = read_json_table::<ResourceKindWeights>(&paths.resource_file);
    let frameworks = read_json_table::<FrameworkControlWeights>(&paths.framework_file);
    WeightTables::new(resource_kinds, frameworks)
}

fn read_json_table<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "weight table not found, using defaults");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "weight table unreadable, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "weight table is not valid json, using defaults");
            None
        }
    }
}
