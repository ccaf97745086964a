use crate::model::domain::DomainId;
use crate::report::ScoreReport;

pub fn render_report_text(report: &ScoreReport) -> String {
    let mut out = String::new();

    out.push_str("Health Score Report\n");
    out.push_str("===================\n\n");

    out.push_str("1. Domain scores\n");
    for id in DomainId::ALL {
        out.push_str(&format!(
            "{:<14} {}\n",
            id.as_str(),
            format_score(report.domains.get(id))
        ));
    }
    out.push('\n');

    out.push_str("2. Metric detail\n");
    if report.metrics.is_empty() {
        out.push_str("(no readings)\n");
    }
    for entry in &report.metrics {
        out.push_str(&format!(
            "{:<16} {:>10.2} {:<14} -> {:>5.1}\n",
            entry.id, entry.value, entry.units, entry.score
        ));
    }
    out.push('\n');

    out.push_str("3. Lifestyle categories\n");
    for category in &report.categories {
        out.push_str(&format!(
            "{} {:<14} {}\n",
            category.emoji,
            category.name,
            format_score(category.score)
        ));
    }

    out
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{s:.1}/100"),
        None => "insufficient data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::category::MarkerId;
    use crate::report::build_report;

    #[test]
    fn test_unavailable_renders_as_insufficient_data() {
        let report = build_report(&HashMap::new(), &HashMap::new());
        let text = render_report_text(&report);
        assert!(text.contains("insufficient data"));
        assert!(!text.contains("0.0/100"));
    }

    #[test]
    fn test_available_scores_render() {
        let readings: HashMap<String, f64> = [("HbA1c".to_string(), 7.0)].into();
        let markers: HashMap<MarkerId, f64> = [(MarkerId::Ast, 80.0)].into();
        let report = build_report(&readings, &markers);
        let text = render_report_text(&report);
        assert!(text.contains("50.0/100"));
        assert!(text.contains("Liver"));
    }
}
