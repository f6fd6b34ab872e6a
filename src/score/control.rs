use super::resource::ResourceWeightResolver;
use crate::types::report::ControlReport;
use crate::types::scoring::ControlScore;
use crate::workload::resource_id;
use tracing::{debug, error};

/// Base score and improvement ratio in effect for one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlWeights {
    pub base_score: f32,
    pub improvement_ratio: f32,
}

/// Scores one control: the failing share of its risk-weighted resources.
pub fn score_control(
    resolver: &ResourceWeightResolver,
    control: &ControlReport,
    weights: ControlWeights,
) -> ControlScore {
    let raw_score = weights.base_score * resolver.total_weight(&control.failed_resources);
    let worst_case = weights.base_score * resolver.total_weight(&control.all_resources);
    let improvement = raw_score * weights.improvement_ratio;

    let (score, scored) = if worst_case > 0.0 {
        (raw_score / worst_case, true)
    } else {
        error!(
            control = %control.control_id,
            evaluated = control.all_resources.len(),
            "worst case was 0, score is not available (will appear as 0)"
        );
        (0.0, false)
    };

    debug!(
        control = %control.control_id,
        raw_score,
        worst_case,
        score,
        "control scored"
    );

    ControlScore {
        control_id: control.control_id.clone(),
        name: control.name.clone(),
        base_score: weights.base_score,
        score,
        raw_score,
        worst_case,
        improvement,
        evaluated: control.all_resources.len(),
        failed_resources: control.failed_resources.iter().map(resource_id).collect(),
        scored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn control(all: Vec<Value>, failed: Vec<Value>) -> ControlReport {
        ControlReport {
            control_id: "C-0013".to_string(),
            name: "Non-root containers".to_string(),
            base_score: 6.0,
            improvement_ratio: None,
            all_resources: all,
            failed_resources: failed,
        }
    }

    fn weights(base_score: f32, improvement_ratio: f32) -> ControlWeights {
        ControlWeights {
            base_score,
            improvement_ratio,
        }
    }

    #[test]
    fn empty_evaluation_scores_zero_without_contribution() {
        let resolver = ResourceWeightResolver::default();
        let scored = score_control(&resolver, &control(vec![], vec![]), weights(6.0, 1.0));

        assert_eq!(scored.score, 0.0);
        assert!(!scored.scored);
        assert_eq!(scored.contributions(), (0.0, 0.0));
    }

    #[test]
    fn passing_control_scores_zero() {
        let resolver = ResourceWeightResolver::default();
        let all = vec![json!({"kind": "Pod"}), json!({"kind": "Pod"})];
        let scored = score_control(&resolver, &control(all, vec![]), weights(6.0, 1.0));

        assert_eq!(scored.score, 0.0);
        assert!(scored.scored);
        assert_eq!(scored.worst_case, 12.0);
        assert_eq!(scored.improvement, 0.0);
    }

    #[test]
    fn failing_share_is_weighted_by_replicas() {
        let resolver = ResourceWeightResolver::default();
        let web = json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": {"name": "web", "namespace": "prod"},
            "spec": {"replicas": 3}
        });
        let pod = json!({"kind": "Pod", "metadata": {"name": "debug"}});
        let scored = score_control(
            &resolver,
            &control(vec![web.clone(), pod], vec![web]),
            weights(2.0, 0.5),
        );

        assert_eq!(scored.raw_score, 6.0);
        assert_eq!(scored.worst_case, 8.0);
        assert_eq!(scored.score, 0.75);
        assert_eq!(scored.improvement, 3.0);
        assert_eq!(scored.evaluated, 2);
        assert_eq!(scored.failed_resources, vec!["apps/v1/prod/Deployment/web"]);
    }

    #[test]
    fn zero_weight_resources_leave_control_unscored() {
        let resolver = ResourceWeightResolver::default();
        let idle_daemon = json!({"kind": "DaemonSet", "metadata": {"name": "agent"}});
        let scored = score_control(
            &resolver,
            &control(vec![idle_daemon.clone()], vec![idle_daemon]),
            weights(6.0, 1.0),
        );

        assert_eq!(scored.evaluated, 1);
        assert_eq!(scored.worst_case, 0.0);
        assert_eq!(scored.score, 0.0);
        assert!(!scored.scored);
    }

    #[test]
    fn rescoring_the_same_control_is_stable() {
        let resolver = ResourceWeightResolver::default();
        let report = control(vec![json!({"kind": "Pod"})], vec![json!({"kind": "Pod"})]);

        let first = score_control(&resolver, &report, weights(6.0, 0.5));
        let second = score_control(&resolver, &report, weights(6.0, 0.5));
        assert_eq!(first, second);
        assert_eq!(second.improvement, 3.0);
    }
}
