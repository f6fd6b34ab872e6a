use crate::error::ScoreError;
use crate::types::scoring::{ControlScore, FrameworkScore, Score};
use tracing::debug;

/// Rolls control scores up into framework percentages of the total
/// risk-weighted surface.
pub fn aggregate(name: &str, controls: Vec<ControlScore>) -> Result<FrameworkScore, ScoreError> {
    let mut wcs_score: Score = 0.0;
    let mut numerator: Score = 0.0;
    let mut improvement: Score = 0.0;
    for control in &controls {
        let (worst_case, raw_score) = control.contributions();
        wcs_score += worst_case;
        numerator += raw_score;
        improvement += control.improvement;
    }

    if wcs_score == 0.0 {
        return Err(ScoreError::ZeroWorstCase {
            framework: name.to_string(),
            partial: Box::new(FrameworkScore {
                name: name.to_string(),
                score: 0.0,
                improvement: 0.0,
                wcs_score,
                controls,
                error: None,
            }),
        });
    }

    let score = numerator * 100.0 / wcs_score;
    let improvement = improvement * 100.0 / wcs_score;
    debug!(framework = name, wcs_score, score, improvement, "framework aggregated");

    Ok(FrameworkScore {
        name: name.to_string(),
        score,
        improvement,
        wcs_score,
        controls,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(id: &str, raw_score: Score, worst_case: Score, improvement: Score) -> ControlScore {
        ControlScore {
            control_id: id.to_string(),
            name: String::new(),
            base_score: 10.0,
            score: if worst_case > 0.0 { raw_score / worst_case } else { 0.0 },
            raw_score,
            worst_case,
            improvement,
            evaluated: usize::from(worst_case > 0.0),
            failed_resources: Vec::new(),
            scored: worst_case > 0.0,
        }
    }

    #[test]
    fn half_failing_framework_scores_fifty() {
        let framework = aggregate(
            "NSA",
            vec![control("C-1", 10.0, 10.0, 10.0), control("C-2", 0.0, 10.0, 0.0)],
        )
        .expect("framework should score");

        assert_eq!(framework.wcs_score, 20.0);
        assert_eq!(framework.score, 50.0);
        assert_eq!(framework.improvement, 50.0);
        assert!(framework.is_available());
    }

    #[test]
    fn unscored_controls_are_excluded_from_totals() {
        let framework = aggregate(
            "NSA",
            vec![control("C-1", 3.0, 12.0, 1.5), control("C-2", 0.0, 0.0, 0.0)],
        )
        .expect("framework should score");

        assert_eq!(framework.score, 25.0);
        assert_eq!(framework.improvement, 12.5);
        assert_eq!(framework.controls.len(), 2);
    }

    #[test]
    fn zero_worst_case_fails_with_framework_name() {
        let err = aggregate("MITRE", vec![control("C-1", 0.0, 0.0, 0.0)])
            .expect_err("empty surface should fail");

        assert!(err.to_string().contains("MITRE"));
        let ScoreError::ZeroWorstCase { partial, .. } = err;
        assert_eq!(partial.score, 0.0);
        assert_eq!(partial.controls.len(), 1);
    }

    #[test]
    fn empty_framework_fails() {
        assert!(aggregate("empty", Vec::new()).is_err());
    }
}
