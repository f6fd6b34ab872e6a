use crate::types::weights::WeightTables;
use crate::workload::{count_from_number, Workload};
use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::debug;

/// Per-kind weight multiplier. A resource's weight is the product of every
/// strategy that applies to it; with none applicable it weighs 1.
pub trait WeightStrategy: Send + Sync {
    fn applies(&self, workload: &Workload<'_>) -> bool;
    fn multiplier(&self, workload: &Workload<'_>) -> f32;
}

/// More replicas, more running instances carrying the same finding.
#[derive(Debug, Default)]
pub struct ReplicaScaled;

impl WeightStrategy for ReplicaScaled {
    fn applies(&self, workload: &Workload<'_>) -> bool {
        workload.replicas() > 1
    }

    fn multiplier(&self, workload: &Workload<'_>) -> f32 {
        workload.replicas() as f32
    }
}

/// One unit per node the daemon set is meant to run on.
#[derive(Debug, Default)]
pub struct DaemonScaled;

#[derive(Debug, Default, Deserialize)]
struct DaemonSetShape {
    #[serde(default)]
    status: DaemonSetStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DaemonSetStatus {
    desired_number_scheduled: Option<Number>,
}

impl WeightStrategy for DaemonScaled {
    fn applies(&self, workload: &Workload<'_>) -> bool {
        workload.kind().eq_ignore_ascii_case("daemonset")
    }

    fn multiplier(&self, workload: &Workload<'_>) -> f32 {
        match DaemonSetShape::deserialize(workload.value()) {
            Ok(shape) => shape
                .status
                .desired_number_scheduled
                .as_ref()
                .map_or(0, count_from_number)
                .max(0) as f32,
            Err(e) => {
                debug!(resource = %workload.id(), error = %e, "daemon set status unreadable, node multiplier skipped");
                1.0
            }
        }
    }
}

pub struct ResourceWeightResolver {
    strategies: Vec<Box<dyn WeightStrategy>>,
    tables: WeightTables,
}

impl Default for ResourceWeightResolver {
    fn default() -> Self {
        Self::new(WeightTables::default())
    }
}

impl ResourceWeightResolver {
    pub fn new(tables: WeightTables) -> Self {
        Self::with_strategies(
            tables,
            vec![Box::new(ReplicaScaled), Box::new(DaemonScaled)],
        )
    }

    pub fn with_strategies(tables: WeightTables, strategies: Vec<Box<dyn WeightStrategy>>) -> Self {
        Self { strategies, tables }
    }

    pub fn tables(&self) -> &WeightTables {
        &self.tables
    }

    pub fn weight(&self, resource: &Value) -> f32 {
        let Some(workload) = Workload::from_value(resource) else {
            // external objects carry no kind to scale by
            return 1.0;
        };

        let mut weight: f32 = 1.0;
        for strategy in &self.strategies {
            if strategy.applies(&workload) {
                weight *= strategy.multiplier(&workload);
            }
        }
        if let Some(kind_weight) = self.tables.kind_weight(&workload.kind().to_lowercase()) {
            weight *= kind_weight;
        }
        weight
    }

    pub fn total_weight(&self, resources: &[Value]) -> f32 {
        resources.iter().map(|resource| self.weight(resource)).sum()
    }
}
