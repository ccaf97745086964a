use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::model::category::MarkerId;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A raw reading as it appears in the input file. Lab reports often carry
/// qualifier text ("<0.04", "5 未満") instead of a bare number, so string
/// values are accepted and cleaned before parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawReading {
    Number(f64),
    Text(String),
}

/// Wearable samples, from which derived metric values (BMI, daily averages)
/// are computed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WearableSample {
    pub height_cm: Option<f64>,
    pub body_mass_kg: Option<f64>,
    pub heart_rate_variability: Option<f64>,
    pub resting_heart_rate: Option<f64>,
    pub vo2_max: Option<f64>,
    pub daily_steps: Vec<f64>,
    pub active_energy_burned: Vec<f64>,
    pub sleep_hours: Vec<f64>,
}

/// One scoring request: raw metric readings, optional pre-normalized
/// biomarker scores for the category engine, and optional wearable samples.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadingFile {
    pub readings: BTreeMap<String, RawReading>,
    pub marker_scores: BTreeMap<MarkerId, f64>,
    pub wearable: Option<WearableSample>,
}

pub fn load_reading_file(path: &Path) -> Result<ReadingFile, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Flattens a reading file into the id → value map the scoring engine
/// consumes. Unparseable entries are skipped with a warning; wearable-derived
/// values fill in only where no explicit reading exists.
pub fn collect_metric_values(file: &ReadingFile) -> HashMap<String, f64> {
    let mut values = HashMap::new();

    for (id, raw) in &file.readings {
        match raw {
            RawReading::Number(v) => {
                values.insert(id.clone(), *v);
            }
            RawReading::Text(text) => match parse_lab_value(text) {
                Some(v) => {
                    values.insert(id.clone(), v);
                }
                None => {
                    warn!(
                        metric = id.as_str(),
                        value = text.as_str(),
                        "unparseable reading; skipping"
                    );
                }
            },
        }
    }

    if let Some(wearable) = &file.wearable {
        for (id, value) in wearable_metric_values(wearable) {
            values.entry(id.to_string()).or_insert(value);
        }
    }

    values
}

/// Derives scoring-engine values from wearable samples.
pub fn wearable_metric_values(sample: &WearableSample) -> Vec<(&'static str, f64)> {
    let mut values = Vec::new();
    if let Some(bmi) = body_mass_index(sample.height_cm, sample.body_mass_kg) {
        values.push(("bmi", bmi));
    }
    if let Some(hrv) = sample.heart_rate_variability {
        values.push(("hrv", hrv));
    }
    if let Some(rhr) = sample.resting_heart_rate {
        values.push(("rhr", rhr));
    }
    if let Some(vo2max) = sample.vo2_max {
        values.push(("vo2max", vo2max));
    }
    if let Some(steps) = daily_average(&sample.daily_steps) {
        values.push(("dailySteps", steps));
    }
    if let Some(kcal) = daily_average(&sample.active_energy_burned) {
        values.push(("activeCalories", kcal));
    }
    if let Some(sleep) = daily_average(&sample.sleep_hours) {
        values.push(("sleepHours", sleep));
    }
    values
}

/// BMI from height in cm and body mass in kg.
pub fn body_mass_index(height_cm: Option<f64>, body_mass_kg: Option<f64>) -> Option<f64> {
    let (height_cm, mass) = (height_cm?, body_mass_kg?);
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return None;
    }
    Some(mass / (height_m * height_m))
}

fn daily_average(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Strips qualifier tokens lab reports attach to detection-limit values
/// ("<0.04", ">300", "0.3 未満", "60 以上") and parses the remainder.
pub fn parse_lab_value(text: &str) -> Option<f64> {
    let cleaned = text
        .trim()
        .replace(['<', '>'], "")
        .replace("未満", "")
        .replace("以上", "");
    cleaned.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lab_value_plain() {
        assert_eq!(parse_lab_value("5.6"), Some(5.6));
        assert_eq!(parse_lab_value(" 120 "), Some(120.0));
    }

    #[test]
    fn test_parse_lab_value_qualifiers() {
        assert_eq!(parse_lab_value("<0.04"), Some(0.04));
        assert_eq!(parse_lab_value(">300"), Some(300.0));
        assert_eq!(parse_lab_value("0.3 未満"), Some(0.3));
        assert_eq!(parse_lab_value("60 以上"), Some(60.0));
    }

    #[test]
    fn test_parse_lab_value_garbage() {
        assert_eq!(parse_lab_value("pending"), None);
        assert_eq!(parse_lab_value(""), None);
    }

    #[test]
    fn test_body_mass_index() {
        let bmi = body_mass_index(Some(170.0), Some(65.0)).unwrap();
        assert!((bmi - 22.49).abs() < 0.01);
        assert_eq!(body_mass_index(Some(0.0), Some(65.0)), None);
        assert_eq!(body_mass_index(None, Some(65.0)), None);
    }

    #[test]
    fn test_collect_skips_unparseable() {
        let json = r#"{
            "readings": {"CRP": "<0.04", "HbA1c": 5.4, "Fe": "pending"}
        }"#;
        let file: ReadingFile = serde_json::from_str(json).unwrap();
        let values = collect_metric_values(&file);
        assert_eq!(values.get("CRP"), Some(&0.04));
        assert_eq!(values.get("HbA1c"), Some(&5.4));
        assert!(!values.contains_key("Fe"));
    }

    #[test]
    fn test_explicit_reading_wins_over_wearable() {
        let json = r#"{
            "readings": {"hrv": 72.0},
            "wearable": {"heartRateVariability": 55.0, "dailySteps": [9000, 11000]}
        }"#;
        let file: ReadingFile = serde_json::from_str(json).unwrap();
        let values = collect_metric_values(&file);
        assert_eq!(values.get("hrv"), Some(&72.0));
        assert_eq!(values.get("dailySteps"), Some(&10000.0));
    }

    #[test]
    fn test_marker_scores_deserialize_by_lab_key() {
        let json = r#"{"markerScores": {"AST": 80.0, "pAlb": 66.0, "TBil": 40.0}}"#;
        let file: ReadingFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.marker_scores.get(&MarkerId::Ast), Some(&80.0));
        assert_eq!(file.marker_scores.get(&MarkerId::PAlb), Some(&66.0));
        assert_eq!(file.marker_scores.get(&MarkerId::TBil), Some(&40.0));
    }
}
