use std::collections::HashMap;

use tracing::debug;

use crate::catalog;
use crate::engine::metric::{NEUTRAL_SCORE, score_metric};
use crate::model::category::MarkerId;

/// Derives per-marker 0-100 scores from raw readings, so the category
/// engine can run off the same blood panel the domain aggregator consumes.
/// Each reading key that resolves to a biomarker is normalized through the
/// marker's metric definition; markers without one (Fe, UIBC, pAlb, Mg,
/// BUN, DBil) get a neutral 50.0. Keys that are no biomarker are ignored.
pub fn derive_marker_scores(readings: &HashMap<String, f64>) -> HashMap<MarkerId, f64> {
    let mut scores = HashMap::new();
    for (key, &value) in readings {
        let Some(marker) = MarkerId::from_key(key) else {
            continue;
        };
        let score = match catalog::metric_by_id(marker.metric_id()) {
            Some(def) => score_metric(value, def),
            None => {
                debug!(
                    marker = marker.as_str(),
                    "no metric definition; using neutral score"
                );
                NEUTRAL_SCORE
            }
        };
        scores.insert(marker, score);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_marker_normalized_through_metric_definition() {
        // HbA1c 7.0 sits halfway down its lower-is-better scale.
        let scores = derive_marker_scores(&readings(&[("HbA1c", 7.0)]));
        assert_eq!(scores.get(&MarkerId::HbA1c), Some(&50.0));
    }

    #[test]
    fn test_renamed_metric_ids_resolve() {
        // TCHO scores through the "TC" definition (ideal 150-220), Cre
        // through "CRE", Ferritin through "ferritin".
        let scores = derive_marker_scores(&readings(&[
            ("TCHO", 180.0),
            ("Cre", 0.8),
            ("Ferritin", 90.0),
            ("TBil", 0.8),
            ("Alb", 4.5),
        ]));
        assert_eq!(scores.get(&MarkerId::Tcho), Some(&100.0));
        assert_eq!(scores.get(&MarkerId::Cre), Some(&100.0));
        assert_eq!(scores.get(&MarkerId::Ferritin), Some(&100.0));
        assert_eq!(scores.get(&MarkerId::TBil), Some(&100.0));
        assert_eq!(scores.get(&MarkerId::Alb), Some(&100.0));
    }

    #[test]
    fn test_alias_keys_resolve() {
        let scores = derive_marker_scores(&readings(&[
            ("γ-GTP", 25.0),
            ("T-Cho", 180.0),
            ("CPK", 120.0),
        ]));
        assert!(scores.contains_key(&MarkerId::Ggt));
        assert_eq!(scores.get(&MarkerId::Tcho), Some(&100.0));
        assert_eq!(scores.get(&MarkerId::Ck), Some(&100.0));
    }

    #[test]
    fn test_unmapped_markers_fall_back_to_neutral() {
        let scores = derive_marker_scores(&readings(&[
            ("Fe", 95.0),
            ("UIBC", 250.0),
            ("pAlb", 28.0),
            ("Mg", 2.1),
            ("BUN", 14.0),
            ("DBil", 0.1),
        ]));
        for marker in [
            MarkerId::Fe,
            MarkerId::Uibc,
            MarkerId::PAlb,
            MarkerId::Mg,
            MarkerId::Bun,
            MarkerId::DBil,
        ] {
            assert_eq!(scores.get(&marker), Some(&NEUTRAL_SCORE), "{marker:?}");
        }
    }

    #[test]
    fn test_non_marker_keys_ignored() {
        let scores = derive_marker_scores(&readings(&[("hrv", 70.0), ("eGFR", 95.0)]));
        assert!(scores.is_empty());
    }
}
