use serde::Serialize;

/// Identifier of a composite domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainId {
    Metabolic,
    Inflammation,
    Recovery,
    AgingPace,
}

impl DomainId {
    pub const ALL: [DomainId; 4] = [
        DomainId::Metabolic,
        DomainId::Inflammation,
        DomainId::Recovery,
        DomainId::AgingPace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DomainId::Metabolic => "metabolic",
            DomainId::Inflammation => "inflammation",
            DomainId::Recovery => "recovery",
            DomainId::AgingPace => "agingPace",
        }
    }
}

/// Static configuration for one composite score: an ordered list of
/// (metric id, weight) pairs. Weights are expected to sum to 1.0; a mismatch
/// is a load-time warning only, because the aggregator always re-normalizes
/// by the weight actually used.
#[derive(Debug, Clone, Copy)]
pub struct DomainConfig {
    pub id: DomainId,
    pub metrics: &'static [(&'static str, f64)],
}

/// All four composite scores for one reading set. `None` means the domain
/// had no contributing metrics ("insufficient data"), which callers must not
/// render as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScores {
    pub metabolic: Option<f64>,
    pub inflammation: Option<f64>,
    pub recovery: Option<f64>,
    pub aging_pace: Option<f64>,
}

impl DomainScores {
    pub fn get(&self, id: DomainId) -> Option<f64> {
        match id {
            DomainId::Metabolic => self.metabolic,
            DomainId::Inflammation => self.inflammation,
            DomainId::Recovery => self.recovery,
            DomainId::AgingPace => self.aging_pace,
        }
    }

    pub fn set(&mut self, id: DomainId, score: Option<f64>) {
        match id {
            DomainId::Metabolic => self.metabolic = score,
            DomainId::Inflammation => self.inflammation = score,
            DomainId::Recovery => self.recovery = score,
            DomainId::AgingPace => self.aging_pace = score,
        }
    }

    pub fn all_available(&self) -> bool {
        self.metabolic.is_some()
            && self.inflammation.is_some()
            && self.recovery.is_some()
            && self.aging_pace.is_some()
    }
}
