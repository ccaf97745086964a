use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::catalog;
use crate::engine::metric::clamp_score;
use crate::model::category::{CategoryId, CategoryScore, MarkerId};

/// Plain weighted mean over pre-normalized 0-100 marker scores. Markers
/// without a score are skipped; `None` when nothing contributed.
pub fn compute_category_score(
    marker_scores: &HashMap<MarkerId, f64>,
    weights: &[(MarkerId, f64)],
) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut weight_used = 0.0;
    for &(marker, weight) in weights {
        if let Some(&score) = marker_scores.get(&marker) {
            weighted_sum += score * weight;
            weight_used += weight;
        }
    }

    if weight_used == 0.0 {
        return None;
    }
    Some(clamp_score(weighted_sum / weight_used))
}

/// Scores all 14 built-in categories. Each category is computed
/// independently; one being unavailable never affects another.
pub fn compute_all_category_scores(
    marker_scores: &HashMap<MarkerId, f64>,
) -> BTreeMap<CategoryId, CategoryScore> {
    let mut result = BTreeMap::new();
    for def in catalog::CATEGORY_DEFINITIONS {
        let score = compute_category_score(marker_scores, def.weights);
        if score.is_none() {
            debug!(category = def.id.as_str(), "no contributing markers");
        }
        result.insert(
            def.id,
            CategoryScore {
                id: def.id,
                emoji: def.emoji,
                name: def.name,
                label: def.label,
                score,
            },
        );
    }
    result
}
