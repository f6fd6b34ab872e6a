pub mod local;

use serde_json::{Map, Number, Value};

/// Borrowed view over a Kubernetes-shaped object. Only objects carrying a
/// string `kind` are treated as workloads; everything else is external.
#[derive(Debug, Clone, Copy)]
pub struct Workload<'a> {
    value: &'a Value,
    object: &'a Map<String, Value>,
}

impl<'a> Workload<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let object = value.as_object()?;
        object.get("kind")?.as_str()?;
        Some(Self { value, object })
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn inspect(&self, path: &[&str]) -> Option<&'a Value> {
        path.iter()
            .try_fold(self.value, |current, key| current.as_object()?.get(*key))
    }

    fn inspect_str(&self, path: &[&str]) -> &'a str {
        self.inspect(path)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn kind(&self) -> &'a str {
        self.object
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn api_version(&self) -> &'a str {
        self.inspect_str(&["apiVersion"])
    }

    pub fn namespace(&self) -> &'a str {
        self.inspect_str(&["metadata", "namespace"])
    }

    pub fn name(&self) -> &'a str {
        self.inspect_str(&["metadata", "name"])
    }

    /// `spec.replicas`, or 1 for kinds that do not carry one.
    pub fn replicas(&self) -> i64 {
        match self.inspect(&["spec", "replicas"]) {
            Some(Value::Number(replicas)) => count_from_number(replicas),
            _ => 1,
        }
    }

    pub fn id(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.api_version(),
            self.namespace(),
            self.kind(),
            self.name()
        )
    }
}

/// Reads an object count that may have been serialized as `3` or `3.0`.
pub fn count_from_number(number: &Number) -> i64 {
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|value| value as i64))
        .unwrap_or(0)
}

/// Display id for any resource: local workloads, cluster workloads, or
/// external records listed by their top-level keys.
pub fn resource_id(resource: &Value) -> String {
    if let Some(local) = local::LocalWorkload::new(resource) {
        return local.id();
    }
    if let Some(workload) = Workload::from_value(resource) {
        return workload.id();
    }
    match resource.as_object() {
        Some(object) => {
            let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
            keys.sort_unstable();
            format!("external/{}", keys.join(","))
        }
        None => "external/unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn deployment(replicas: Value) -> Value {
        json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": {"name": "web", "namespace": "prod"},
            "spec": {"replicas": replicas}
        })
    }

    #[test]
    fn workload_requires_string_kind() {
        assert!(Workload::from_value(&json!({"kind": "Pod"})).is_some());
        assert!(Workload::from_value(&json!({"kind": 3})).is_none());
        assert!(Workload::from_value(&json!({"type": "aws-role"})).is_none());
        assert!(Workload::from_value(&json!("Pod")).is_none());
    }

    #[test]
    fn replicas_read_from_spec_with_default() {
        let integral = deployment(json!(4));
        let float = deployment(json!(3.0));
        let pod = json!({"kind": "Pod"});

        assert_eq!(Workload::from_value(&integral).map(|w| w.replicas()), Some(4));
        assert_eq!(Workload::from_value(&float).map(|w| w.replicas()), Some(3));
        assert_eq!(Workload::from_value(&pod).map(|w| w.replicas()), Some(1));
    }

    #[test]
    fn workload_id_joins_identity_fields() {
        let value = deployment(json!(1));
        let workload = Workload::from_value(&value).expect("deployment is a workload");
        assert_eq!(workload.id(), "apps/v1/prod/Deployment/web");
    }

    #[test]
    fn resource_id_covers_external_records() {
        assert_eq!(
            resource_id(&json!({"type": "role", "arn": "x"})),
            "external/arn,type"
        );
        assert_eq!(resource_id(&json!(null)), "external/unknown");
    }
}
