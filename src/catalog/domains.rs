use crate::model::domain::{DomainConfig, DomainId};

/// Metabolic capacity.
pub const METABOLIC: DomainConfig = DomainConfig {
    id: DomainId::Metabolic,
    metrics: &[
        ("HbA1c", 0.25),
        ("TG", 0.20),
        ("HDL", 0.15),
        ("LDL", 0.15),
        ("bmi", 0.10),
        ("vo2max", 0.10),
        ("activeCalories", 0.05),
    ],
};

/// Inflammation level.
pub const INFLAMMATION: DomainConfig = DomainConfig {
    id: DomainId::Inflammation,
    metrics: &[
        ("CRP", 0.40),
        ("AST", 0.15),
        ("ALT", 0.15),
        ("GGT", 0.10),
        ("hrv", 0.10),
        ("sleepHours", 0.10),
    ],
};

/// Recovery speed.
pub const RECOVERY: DomainConfig = DomainConfig {
    id: DomainId::Recovery,
    metrics: &[
        ("CRP", 0.20),
        ("CK", 0.20),
        ("ferritin", 0.15),
        ("hrv", 0.15),
        ("rhr", 0.10),
        ("sleepHours", 0.10),
        ("ALB", 0.10),
    ],
};

/// Aging pace.
pub const AGING_PACE: DomainConfig = DomainConfig {
    id: DomainId::AgingPace,
    metrics: &[
        ("HbA1c", 0.20),
        ("CRP", 0.15),
        ("ALB", 0.15),
        ("CRE", 0.10),
        ("eGFR", 0.10),
        ("hrv", 0.10),
        ("vo2max", 0.10),
        ("bmi", 0.10),
    ],
};

pub const ALL_DOMAINS: &[DomainConfig] = &[METABOLIC, INFLAMMATION, RECOVERY, AGING_PACE];

pub fn domain_config(id: DomainId) -> &'static DomainConfig {
    match id {
        DomainId::Metabolic => &METABOLIC,
        DomainId::Inflammation => &INFLAMMATION,
        DomainId::Recovery => &RECOVERY,
        DomainId::AgingPace => &AGING_PACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_domains_present() {
        assert_eq!(ALL_DOMAINS.len(), 4);
        for id in DomainId::ALL {
            assert_eq!(domain_config(id).id, id);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        for domain in ALL_DOMAINS {
            let total: f64 = domain.metrics.iter().map(|&(_, w)| w).sum();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "domain {:?} weights sum to {total}",
                domain.id
            );
        }
    }

    #[test]
    fn test_inflammation_weights() {
        assert_eq!(INFLAMMATION.metrics[0], ("CRP", 0.40));
        assert_eq!(INFLAMMATION.metrics.len(), 6);
    }
}
