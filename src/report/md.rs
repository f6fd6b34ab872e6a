use super::PostureReport;

pub fn to_markdown(report: &PostureReport) -> String {
    let mut output = String::new();
    output.push_str("# Posture Report\n\n");
    output.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if report.frameworks.is_empty() {
        output.push_str("- no frameworks\n");
        return output;
    }

    for framework in &report.frameworks {
        output.push_str(&format!("## {}\n\n", framework.name));
        output.push_str(&format!("Score: {:.2}%\n", framework.score));
        output.push_str(&format!("Improvement: {:.2}%\n", framework.improvement));
        if let Some(error) = &framework.error {
            output.push_str(&format!("Error: {error}\n"));
        }
        output.push('\n');

        if framework.controls.is_empty() {
            output.push_str("- no controls\n\n");
            continue;
        }

        output.push_str("| Control | Name | Base | Score | Failed | Improvement |\n");
        output.push_str("|---|---|---|---|---|---|\n");
        for control in &framework.controls {
            let score = if control.scored {
                format!("{:.3}", control.score)
            } else {
                "n/a".to_string()
            };
            output.push_str(&format!(
                "| {} | {} | {:.1} | {} | {}/{} | {:.2} |\n",
                control.control_id,
                control.name,
                control.base_score,
                score,
                control.failed_resources.len(),
                control.evaluated,
                control.improvement
            ));
        }
        output.push('\n');
    }

    output
}
