pub mod category;
pub mod domain;
pub mod marker;
pub mod metric;

pub use category::{compute_all_category_scores, compute_category_score};
pub use domain::{compute_all_domain_scores, compute_domain_score};
pub use marker::derive_marker_scores;
pub use metric::{NEUTRAL_SCORE, score_metric};
