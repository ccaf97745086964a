use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::model::category::CategoryId;
use crate::model::metric::Direction;

pub mod categories;
pub mod domains;
pub mod metrics;

pub use categories::{CATEGORY_DEFINITIONS, category_def};
pub use domains::{ALL_DOMAINS, domain_config};
pub use metrics::{ALL_METRICS, BLOOD_METRICS, WEARABLE_METRICS, metric_by_id};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("metric '{id}': min {min} must be below max {max}")]
    InvertedRange { id: &'static str, min: f64, max: f64 },

    #[error("metric '{id}': duplicate id in catalog")]
    DuplicateMetric { id: &'static str },

    #[error("metric '{id}': rangeIsBest requires idealLow and idealHigh")]
    MissingIdealBounds { id: &'static str },

    #[error("metric '{id}': ideal range [{low}, {high}] must lie within [{min}, {max}]")]
    IdealOutsideRange {
        id: &'static str,
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },

    #[error("domain '{domain}': weight {weight} for metric '{metric}' must be positive")]
    NonPositiveWeight {
        domain: &'static str,
        metric: &'static str,
        weight: f64,
    },

    #[error("domain '{domain}' references unknown metric '{metric}'")]
    UnknownMetric {
        domain: &'static str,
        metric: &'static str,
    },

    #[error("category '{category}': weight {weight} for marker '{marker}' must be positive")]
    NonPositiveCategoryWeight {
        category: &'static str,
        marker: &'static str,
        weight: f64,
    },

    #[error("category catalog is missing an entry for '{category}'")]
    MissingCategory { category: &'static str },
}

/// Checks every compiled-in catalog once at startup.
///
/// Structural invariants (inverted ranges, missing ideal bounds, unknown
/// metric references) are hard errors because they indicate a programming
/// mistake. Domain weight sums off 1.0 only warn: the aggregator always
/// re-normalizes by the weight actually used, so a mismatch cannot bias a
/// per-call result.
pub fn validate() -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for def in metrics::ALL_METRICS.iter() {
        if !seen.insert(def.id) {
            return Err(ConfigError::DuplicateMetric { id: def.id });
        }
        if def.min >= def.max {
            return Err(ConfigError::InvertedRange {
                id: def.id,
                min: def.min,
                max: def.max,
            });
        }
        if def.direction == Direction::RangeIsBest {
            let (Some(low), Some(high)) = (def.ideal_low, def.ideal_high) else {
                return Err(ConfigError::MissingIdealBounds { id: def.id });
            };
            if !(def.min <= low && low <= high && high <= def.max) {
                return Err(ConfigError::IdealOutsideRange {
                    id: def.id,
                    low,
                    high,
                    min: def.min,
                    max: def.max,
                });
            }
        }
    }

    for domain in domains::ALL_DOMAINS {
        let mut total = 0.0;
        for &(metric, weight) in domain.metrics {
            if weight <= 0.0 {
                return Err(ConfigError::NonPositiveWeight {
                    domain: domain.id.as_str(),
                    metric,
                    weight,
                });
            }
            if metrics::metric_by_id(metric).is_none() {
                return Err(ConfigError::UnknownMetric {
                    domain: domain.id.as_str(),
                    metric,
                });
            }
            total += weight;
        }
        if (total - 1.0).abs() > 0.001 {
            warn!(
                domain = domain.id.as_str(),
                total, "domain weights do not sum to 1.0"
            );
        }
    }

    for id in CategoryId::ALL {
        if !categories::CATEGORY_DEFINITIONS.iter().any(|d| d.id == id) {
            return Err(ConfigError::MissingCategory {
                category: id.as_str(),
            });
        }
    }
    for def in categories::CATEGORY_DEFINITIONS {
        for &(marker, weight) in def.weights {
            if weight <= 0.0 {
                return Err(ConfigError::NonPositiveCategoryWeight {
                    category: def.id.as_str(),
                    marker: marker.as_str(),
                    weight,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_valid() {
        validate().unwrap();
    }
}
