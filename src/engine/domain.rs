use std::collections::HashMap;

use tracing::debug;

use crate::catalog;
use crate::engine::metric::{clamp_score, score_metric};
use crate::model::domain::{DomainConfig, DomainScores};
use crate::model::metric::MetricDef;

/// Weighted average of metric scores for one domain, tolerant of partial
/// data. Metrics without a reading (or without a catalog entry) are skipped;
/// the denominator is the weight actually used, so missing inputs never bias
/// the result toward 0. Returns `None` when nothing contributed.
pub fn compute_domain_score(
    readings: &HashMap<String, f64>,
    domain: &DomainConfig,
    catalog: &[MetricDef],
) -> Option<f64> {
    let def_by_id: HashMap<&str, &MetricDef> = catalog.iter().map(|def| (def.id, def)).collect();

    let mut weighted_sum = 0.0;
    let mut weight_used = 0.0;
    for &(metric_id, weight) in domain.metrics {
        let Some(&value) = readings.get(metric_id) else {
            debug!(
                domain = domain.id.as_str(),
                metric = metric_id,
                "no reading; skipping"
            );
            continue;
        };
        let Some(def) = def_by_id.get(metric_id) else {
            debug!(
                domain = domain.id.as_str(),
                metric = metric_id,
                "no catalog entry; skipping"
            );
            continue;
        };
        weighted_sum += score_metric(value, def) * weight;
        weight_used += weight;
    }

    if weight_used == 0.0 {
        debug!(domain = domain.id.as_str(), "no contributing metrics");
        return None;
    }
    Some(clamp_score(weighted_sum / weight_used))
}

/// Runs the aggregator over all four built-in domains against the built-in
/// metric catalog.
pub fn compute_all_domain_scores(readings: &HashMap<String, f64>) -> DomainScores {
    let mut scores = DomainScores::default();
    for domain in catalog::ALL_DOMAINS {
        scores.set(
            domain.id,
            compute_domain_score(readings, domain, &catalog::ALL_METRICS),
        );
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domains::INFLAMMATION;
    use crate::model::domain::DomainId;

    fn readings(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_empty_readings_unavailable() {
        let score = compute_domain_score(&HashMap::new(), &INFLAMMATION, &catalog::ALL_METRICS);
        assert_eq!(score, None);
    }

    #[test]
    fn test_single_metric_normalization_cancels_weight() {
        // Only CRP present: weight_used is 0.40 and the division restores
        // the bare metric score.
        let r = readings(&[("CRP", 1.0)]);
        let crp = catalog::metric_by_id("CRP").unwrap();
        let expected = score_metric(1.0, crp);
        let score = compute_domain_score(&r, &INFLAMMATION, &catalog::ALL_METRICS).unwrap();
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_metric_skipped() {
        let domain = DomainConfig {
            id: DomainId::Inflammation,
            metrics: &[("CRP", 0.5), ("not-a-metric", 0.5)],
        };
        let r = readings(&[("CRP", 0.0), ("not-a-metric", 42.0)]);
        let score = compute_domain_score(&r, &domain, &catalog::ALL_METRICS).unwrap();
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_weight_sum_off_one_still_in_range() {
        let domain = DomainConfig {
            id: DomainId::Metabolic,
            metrics: &[("HbA1c", 2.0), ("HDL", 3.0)],
        };
        let r = readings(&[("HbA1c", 7.0), ("HDL", 60.0)]);
        let score = compute_domain_score(&r, &domain, &catalog::ALL_METRICS).unwrap();
        assert!((0.0..=100.0).contains(&score));
        // (50*2 + 50*3) / 5 = 50.
        assert!((score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_independence() {
        let forward = DomainConfig {
            id: DomainId::Recovery,
            metrics: &[("CRP", 0.3), ("hrv", 0.3), ("ALB", 0.4)],
        };
        let reversed = DomainConfig {
            id: DomainId::Recovery,
            metrics: &[("ALB", 0.4), ("hrv", 0.3), ("CRP", 0.3)],
        };
        let r = readings(&[("CRP", 0.5), ("hrv", 80.0), ("ALB", 4.4)]);
        let a = compute_domain_score(&r, &forward, &catalog::ALL_METRICS).unwrap();
        let b = compute_domain_score(&r, &reversed, &catalog::ALL_METRICS).unwrap();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_all_domains_full_panel() {
        let r = readings(&[
            ("HbA1c", 5.2),
            ("TG", 80.0),
            ("HDL", 65.0),
            ("LDL", 100.0),
            ("CRP", 0.05),
            ("AST", 22.0),
            ("ALT", 20.0),
            ("GGT", 25.0),
            ("CK", 120.0),
            ("ferritin", 90.0),
            ("ALB", 4.5),
            ("CRE", 0.8),
            ("eGFR", 95.0),
            ("bmi", 22.0),
            ("vo2max", 45.0),
            ("activeCalories", 500.0),
            ("hrv", 70.0),
            ("rhr", 55.0),
            ("sleepHours", 7.5),
        ]);
        let scores = compute_all_domain_scores(&r);
        assert!(scores.all_available());
        for id in DomainId::ALL {
            let s = scores.get(id).unwrap();
            assert!((0.0..=100.0).contains(&s), "{id:?} out of range: {s}");
        }
    }

    #[test]
    fn test_blood_only_leaves_no_domain_empty() {
        // Every domain includes at least one blood metric, so a blood-only
        // panel still yields four scores.
        let r = readings(&[("HbA1c", 5.6), ("CRP", 0.1), ("CK", 150.0), ("ALB", 4.2)]);
        let scores = compute_all_domain_scores(&r);
        assert!(scores.all_available());
    }
}
