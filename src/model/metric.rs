use serde::Serialize;

/// Scoring direction for a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Higher raw values score higher (HRV, VO2max, HDL).
    HigherIsBetter,
    /// Lower raw values score higher (CRP, HbA1c, LDL, resting heart rate).
    LowerIsBetter,
    /// An ideal sub-range scores 100, with linear ramps on both sides
    /// (total protein, albumin, BMI, sleep hours).
    RangeIsBest,
}

/// Static configuration for one measurable quantity.
///
/// `min`/`max` define the 0-100 mapping; raw values outside that range are
/// legal input and clamp at the scale ends. `ideal_low`/`ideal_high` are only
/// meaningful for `RangeIsBest` metrics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricDef {
    pub id: &'static str,
    /// Display unit; not used in computation.
    pub units: &'static str,
    pub direction: Direction,
    pub min: f64,
    pub max: f64,
    pub ideal_low: Option<f64>,
    pub ideal_high: Option<f64>,
}
