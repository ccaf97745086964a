use std::sync::LazyLock;

use crate::model::metric::{Direction, MetricDef};

/// Blood-panel metric definitions (27).
pub const BLOOD_METRICS: &[MetricDef] = &[
    // Glucose metabolism
    MetricDef {
        id: "HbA1c",
        units: "%",
        direction: Direction::LowerIsBetter,
        min: 4.0,
        max: 10.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "FBG",
        units: "mg/dL",
        direction: Direction::LowerIsBetter,
        min: 70.0,
        max: 200.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "insulin",
        units: "μU/mL",
        direction: Direction::RangeIsBest,
        min: 2.0,
        max: 30.0,
        ideal_low: Some(3.0),
        ideal_high: Some(15.0),
    },
    // Lipid metabolism
    MetricDef {
        id: "TG",
        units: "mg/dL",
        direction: Direction::LowerIsBetter,
        min: 30.0,
        max: 300.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "TC",
        units: "mg/dL",
        direction: Direction::RangeIsBest,
        min: 120.0,
        max: 280.0,
        ideal_low: Some(150.0),
        ideal_high: Some(220.0),
    },
    MetricDef {
        id: "HDL",
        units: "mg/dL",
        direction: Direction::HigherIsBetter,
        min: 20.0,
        max: 100.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "LDL",
        units: "mg/dL",
        direction: Direction::LowerIsBetter,
        min: 40.0,
        max: 200.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "nonHDL",
        units: "mg/dL",
        direction: Direction::LowerIsBetter,
        min: 50.0,
        max: 220.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "LH_ratio",
        units: "",
        direction: Direction::LowerIsBetter,
        min: 1.0,
        max: 5.0,
        ideal_low: None,
        ideal_high: None,
    },
    // Inflammation
    MetricDef {
        id: "CRP",
        units: "mg/dL",
        direction: Direction::LowerIsBetter,
        min: 0.0,
        max: 2.0,
        ideal_low: None,
        ideal_high: None,
    },
    // Kidney function
    MetricDef {
        id: "CRE",
        units: "mg/dL",
        direction: Direction::RangeIsBest,
        min: 0.4,
        max: 2.0,
        ideal_low: Some(0.6),
        ideal_high: Some(1.2),
    },
    MetricDef {
        id: "eGFR",
        units: "mL/min/1.73m²",
        direction: Direction::HigherIsBetter,
        min: 15.0,
        max: 120.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "UA",
        units: "mg/dL",
        direction: Direction::RangeIsBest,
        min: 2.0,
        max: 10.0,
        ideal_low: Some(3.0),
        ideal_high: Some(7.0),
    },
    // Liver function
    MetricDef {
        id: "AST",
        units: "U/L",
        direction: Direction::LowerIsBetter,
        min: 10.0,
        max: 100.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "ALT",
        units: "U/L",
        direction: Direction::LowerIsBetter,
        min: 5.0,
        max: 100.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "GGT",
        units: "U/L",
        direction: Direction::LowerIsBetter,
        min: 10.0,
        max: 150.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "ALP",
        units: "U/L",
        direction: Direction::RangeIsBest,
        min: 50.0,
        max: 400.0,
        ideal_low: Some(100.0),
        ideal_high: Some(330.0),
    },
    MetricDef {
        id: "TBIL",
        units: "mg/dL",
        direction: Direction::RangeIsBest,
        min: 0.2,
        max: 3.0,
        ideal_low: Some(0.3),
        ideal_high: Some(1.2),
    },
    // Protein status
    MetricDef {
        id: "TP",
        units: "g/dL",
        direction: Direction::RangeIsBest,
        min: 5.0,
        max: 9.0,
        ideal_low: Some(6.5),
        ideal_high: Some(8.2),
    },
    MetricDef {
        id: "ALB",
        units: "g/dL",
        direction: Direction::RangeIsBest,
        min: 2.5,
        max: 5.5,
        ideal_low: Some(4.0),
        ideal_high: Some(5.0),
    },
    MetricDef {
        id: "AG_ratio",
        units: "",
        direction: Direction::RangeIsBest,
        min: 0.8,
        max: 2.5,
        ideal_low: Some(1.2),
        ideal_high: Some(2.0),
    },
    // Electrolytes
    MetricDef {
        id: "Na",
        units: "mEq/L",
        direction: Direction::RangeIsBest,
        min: 130.0,
        max: 150.0,
        ideal_low: Some(136.0),
        ideal_high: Some(145.0),
    },
    MetricDef {
        id: "K",
        units: "mEq/L",
        direction: Direction::RangeIsBest,
        min: 2.5,
        max: 6.0,
        ideal_low: Some(3.5),
        ideal_high: Some(5.0),
    },
    MetricDef {
        id: "Cl",
        units: "mEq/L",
        direction: Direction::RangeIsBest,
        min: 90.0,
        max: 115.0,
        ideal_low: Some(98.0),
        ideal_high: Some(108.0),
    },
    // Muscle and energy
    MetricDef {
        id: "CK",
        units: "U/L",
        direction: Direction::RangeIsBest,
        min: 20.0,
        max: 500.0,
        ideal_low: Some(50.0),
        ideal_high: Some(250.0),
    },
    MetricDef {
        id: "LDH",
        units: "U/L",
        direction: Direction::RangeIsBest,
        min: 100.0,
        max: 500.0,
        ideal_low: Some(120.0),
        ideal_high: Some(240.0),
    },
    MetricDef {
        id: "ferritin",
        units: "ng/mL",
        direction: Direction::RangeIsBest,
        min: 10.0,
        max: 500.0,
        ideal_low: Some(30.0),
        ideal_high: Some(250.0),
    },
];

/// Wearable-device metric definitions (7).
pub const WEARABLE_METRICS: &[MetricDef] = &[
    MetricDef {
        id: "bmi",
        units: "",
        direction: Direction::RangeIsBest,
        min: 15.0,
        max: 40.0,
        ideal_low: Some(18.5),
        ideal_high: Some(24.9),
    },
    MetricDef {
        id: "hrv",
        units: "ms",
        direction: Direction::HigherIsBetter,
        min: 20.0,
        max: 200.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "rhr",
        units: "bpm",
        direction: Direction::LowerIsBetter,
        min: 40.0,
        max: 100.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "vo2max",
        units: "ml/kg/min",
        direction: Direction::HigherIsBetter,
        min: 20.0,
        max: 70.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "dailySteps",
        units: "steps",
        direction: Direction::HigherIsBetter,
        min: 0.0,
        max: 20000.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "activeCalories",
        units: "kcal",
        direction: Direction::HigherIsBetter,
        min: 0.0,
        max: 1500.0,
        ideal_low: None,
        ideal_high: None,
    },
    MetricDef {
        id: "sleepHours",
        units: "hours",
        direction: Direction::RangeIsBest,
        min: 3.0,
        max: 12.0,
        ideal_low: Some(7.0),
        ideal_high: Some(9.0),
    },
];

/// Blood-panel and wearable definitions combined, in catalog order.
pub static ALL_METRICS: LazyLock<Vec<MetricDef>> = LazyLock::new(|| {
    BLOOD_METRICS
        .iter()
        .chain(WEARABLE_METRICS.iter())
        .copied()
        .collect()
});

pub fn metric_by_id(id: &str) -> Option<&'static MetricDef> {
    ALL_METRICS.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(BLOOD_METRICS.len(), 27);
        assert_eq!(WEARABLE_METRICS.len(), 7);
        assert_eq!(ALL_METRICS.len(), 34);
    }

    #[test]
    fn test_metric_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in ALL_METRICS.iter() {
            assert!(seen.insert(def.id), "duplicate metric id {}", def.id);
        }
    }

    #[test]
    fn test_metric_by_id() {
        let hba1c = metric_by_id("HbA1c").unwrap();
        assert_eq!(hba1c.direction, Direction::LowerIsBetter);
        assert_eq!(hba1c.min, 4.0);
        assert_eq!(hba1c.max, 10.0);
        assert!(metric_by_id("no-such-metric").is_none());
    }
}
