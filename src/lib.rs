//! Deterministic scoring engine for blood-panel and wearable health metrics.
//!
//! Two independent subsystems share one design pattern (weighted aggregation
//! over normalized sub-scores):
//!
//! - [`engine::score_metric`] normalizes a raw reading to 0-100 under a
//!   direction policy, and [`engine::compute_domain_score`] combines metric
//!   scores into composite domain scores (metabolic, inflammation, recovery,
//!   aging pace).
//! - [`engine::compute_category_score`] is a plain weighted mean over
//!   pre-normalized 0-100 biomarker scores, producing one score per each of
//!   the 14 lifestyle categories.
//!
//! All scoring operations are pure and synchronous; "insufficient data" is
//! an explicit `None`, never an exception and never a silent 0.

pub mod catalog;
pub mod engine;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;
