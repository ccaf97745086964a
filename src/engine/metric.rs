use tracing::warn;

use crate::model::metric::{Direction, MetricDef};

/// Fallback for a `RangeIsBest` metric whose ideal bounds are missing. A
/// configuration fault, not a data issue, so the caller's aggregate keeps
/// going on a neutral value instead of aborting.
pub const NEUTRAL_SCORE: f64 = 50.0;

pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Maps one raw reading to a 0-100 score under the metric's direction
/// policy. Out-of-range input is legal and clamps at the scale ends; no
/// numeric input ever produces an error.
pub fn score_metric(value: f64, def: &MetricDef) -> f64 {
    match def.direction {
        Direction::HigherIsBetter => score_higher_is_better(value, def.min, def.max),
        Direction::LowerIsBetter => score_lower_is_better(value, def.min, def.max),
        Direction::RangeIsBest => {
            let (Some(ideal_low), Some(ideal_high)) = (def.ideal_low, def.ideal_high) else {
                warn!(
                    metric = def.id,
                    "rangeIsBest metric is missing ideal bounds; using neutral score"
                );
                return NEUTRAL_SCORE;
            };
            score_range_is_best(value, def.min, def.max, ideal_low, ideal_high)
        }
    }
}

fn score_higher_is_better(value: f64, min: f64, max: f64) -> f64 {
    clamp_score((value - min) / (max - min) * 100.0)
}

fn score_lower_is_better(value: f64, min: f64, max: f64) -> f64 {
    clamp_score((max - value) / (max - min) * 100.0)
}

fn score_range_is_best(value: f64, min: f64, max: f64, ideal_low: f64, ideal_high: f64) -> f64 {
    if value >= ideal_low && value <= ideal_high {
        100.0
    } else if value < ideal_low {
        // Linear ramp from 0 at min to 100 at ideal_low.
        clamp_score((value - min) / (ideal_low - min) * 100.0)
    } else {
        // Linear ramp from 100 at ideal_high down to 0 at max.
        clamp_score((max - value) / (max - ideal_high) * 100.0)
    }
}
