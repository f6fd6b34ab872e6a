use super::Workload;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

/// A workload read from a file rather than a cluster, identified by its path.
#[derive(Debug, Clone, Copy)]
pub struct LocalWorkload<'a> {
    workload: Workload<'a>,
    path: &'a str,
}

impl<'a> LocalWorkload<'a> {
    pub fn new(value: &'a Value) -> Option<Self> {
        if !is_local_workload(value) {
            return None;
        }
        let workload = Workload::from_value(value)?;
        let path = value
            .get("path")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Some(Self { workload, path })
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn id(&self) -> String {
        format!("path={}/{}", STANDARD.encode(self.path()), self.workload.id())
    }
}

pub fn is_local_workload(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("path"))
}
