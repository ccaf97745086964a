use std::collections::HashMap;

use serde::Serialize;

use crate::catalog;
use crate::engine;
use crate::model::category::{CategoryScore, MarkerId};
use crate::model::domain::DomainScores;

pub mod text;

/// Per-metric contribution detail: the raw reading next to its 0-100 score.
#[derive(Debug, Clone, Serialize)]
pub struct MetricScoreEntry {
    pub id: &'static str,
    pub units: &'static str,
    pub value: f64,
    pub score: f64,
}

/// Full scoring output for one reading set. `Unavailable` scores serialize
/// as `null` and render as "insufficient data", never as 0.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub tool: &'static str,
    pub version: &'static str,
    pub domains: DomainScores,
    pub metrics: Vec<MetricScoreEntry>,
    pub categories: Vec<CategoryScore>,
}

pub fn build_report(
    readings: &HashMap<String, f64>,
    marker_scores: &HashMap<MarkerId, f64>,
) -> ScoreReport {
    let domains = engine::compute_all_domain_scores(readings);

    // Per-metric detail in catalog order, for readings the catalog knows.
    let mut metrics = Vec::new();
    for def in catalog::ALL_METRICS.iter() {
        if let Some(&value) = readings.get(def.id) {
            metrics.push(MetricScoreEntry {
                id: def.id,
                units: def.units,
                value,
                score: engine::score_metric(value, def),
            });
        }
    }

    let categories = engine::compute_all_category_scores(marker_scores)
        .into_values()
        .collect();

    ScoreReport {
        tool: "vitalscore",
        version: env!("CARGO_PKG_VERSION"),
        domains,
        metrics,
        categories,
    }
}

pub fn render_json(report: &ScoreReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_serializes_as_null() {
        let report = build_report(&HashMap::new(), &HashMap::new());
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["domains"]["metabolic"], serde_json::Value::Null);
        assert_eq!(value["categories"][0]["score"], serde_json::Value::Null);
        assert_eq!(value["tool"], "vitalscore");
    }

    #[test]
    fn test_metric_detail_in_catalog_order() {
        let readings: HashMap<String, f64> =
            [("hrv".to_string(), 70.0), ("HbA1c".to_string(), 5.4)].into();
        let report = build_report(&readings, &HashMap::new());
        let ids: Vec<&str> = report.metrics.iter().map(|m| m.id).collect();
        // Blood metrics precede wearable metrics in the catalog.
        assert_eq!(ids, vec!["HbA1c", "hrv"]);
    }

    #[test]
    fn test_report_has_all_categories() {
        let report = build_report(&HashMap::new(), &HashMap::new());
        assert_eq!(report.categories.len(), 14);
    }
}
