use crate::model::category::{CategoryDef, CategoryId, MarkerId};

use MarkerId::*;

// Weights are percentage-like and intentionally do not all sum to 100; the
// scorer normalizes by the weight actually used.

pub const DIET: CategoryDef = CategoryDef {
    id: CategoryId::Diet,
    emoji: "⚡️",
    name: "Diet",
    label: "Is your metabolism primed to shed fat or to hold on to it?",
    weights: &[
        (HbA1c, 25.0),
        (Tg, 20.0),
        (Ldl, 15.0),
        (Hdl, 10.0),
        (Tcho, 10.0),
        (Ast, 10.0),
        (Alt, 10.0),
    ],
};

pub const SLEEP: CategoryDef = CategoryDef {
    id: CategoryId::Sleep,
    emoji: "😴",
    name: "Sleep",
    label: "Does your body actually recover while you sleep?",
    weights: &[
        (Mg, 25.0),
        (Crp, 20.0),
        (Ck, 15.0),
        (HbA1c, 15.0),
        (Ast, 10.0),
        (Alt, 10.0),
        (Bun, 5.0),
    ],
};

pub const RECOVERY: CategoryDef = CategoryDef {
    id: CategoryId::Recovery,
    emoji: "💪",
    name: "Recovery",
    label: "How far can one night of rest recharge you?",
    weights: &[
        (Fe, 15.0),
        (Ferritin, 15.0),
        (Mg, 15.0),
        (Ck, 15.0),
        (Tp, 10.0),
        (Alb, 10.0),
        (Crp, 10.0),
        (Uibc, 5.0),
        (PAlb, 5.0),
    ],
};

pub const PERFORMANCE: CategoryDef = CategoryDef {
    id: CategoryId::Performance,
    emoji: "🏃",
    name: "Performance",
    label: "Is your blood spec'd for running and moving?",
    weights: &[
        (HbA1c, 15.0),
        (Ck, 15.0),
        (Fe, 10.0),
        (Ferritin, 10.0),
        (Tg, 10.0),
        (Hdl, 10.0),
        (Ldl, 10.0),
        (Tcho, 10.0),
        (Mg, 10.0),
    ],
};

pub const STRESS: CategoryDef = CategoryDef {
    id: CategoryId::Stress,
    emoji: "🧘",
    name: "Stress",
    label: "How much stress load has built up inside your body?",
    weights: &[
        (Crp, 30.0),
        (Mg, 20.0),
        (HbA1c, 15.0),
        (Ua, 15.0),
        (Ast, 10.0),
        (Alt, 10.0),
    ],
};

pub const ANTIOXIDANT: CategoryDef = CategoryDef {
    id: CategoryId::Antioxidant,
    emoji: "🛡️",
    name: "Antioxidant",
    label: "Is your body keeping itself rust-resistant?",
    weights: &[
        (TBil, 20.0),
        (Crp, 20.0),
        (DBil, 10.0),
        (HbA1c, 10.0),
        (Ldl, 10.0),
        (Hdl, 10.0),
        (Tg, 10.0),
        (Tcho, 10.0),
    ],
};

pub const COGNITION: CategoryDef = CategoryDef {
    id: CategoryId::Cognition,
    emoji: "🧠",
    name: "Cognition",
    label: "Is the foundation for mental sharpness and focus in place?",
    weights: &[
        (HbA1c, 20.0),
        (Ldl, 15.0),
        (Crp, 15.0),
        (Hdl, 10.0),
        (Tcho, 10.0),
        (Mg, 10.0),
        (Fe, 10.0),
        (Ferritin, 10.0),
    ],
};

pub const APPEARANCE: CategoryDef = CategoryDef {
    id: CategoryId::Appearance,
    emoji: "✨",
    name: "Appearance",
    label: "Is your inner state supporting a youthful outward impression?",
    weights: &[
        (HbA1c, 15.0),
        (Tp, 10.0),
        (Alb, 10.0),
        (Fe, 10.0),
        (Ferritin, 10.0),
        (Crp, 10.0),
        (Mg, 10.0),
        (Tcho, 10.0),
        (PAlb, 5.0),
        (Ldl, 5.0),
        (Hdl, 5.0),
    ],
};

pub const SKIN: CategoryDef = CategoryDef {
    id: CategoryId::Skin,
    emoji: "🌸",
    name: "Skin",
    label: "Does your blood support firm, clear, trouble-free skin?",
    weights: &[
        (HbA1c, 20.0),
        (Tp, 10.0),
        (Alb, 10.0),
        (Fe, 10.0),
        (Ferritin, 10.0),
        (Crp, 10.0),
        (Tcho, 10.0),
        (Ldl, 10.0),
        (PAlb, 5.0),
        (Tg, 5.0),
    ],
};

pub const SEXUAL: CategoryDef = CategoryDef {
    id: CategoryId::Sexual,
    emoji: "❤️",
    name: "Sexual health",
    label: "Are hormones, blood flow, and metabolism in balance?",
    weights: &[
        (HbA1c, 20.0),
        (Tcho, 15.0),
        (Ldl, 15.0),
        (Hdl, 10.0),
        (Tg, 10.0),
        (Ua, 10.0),
        (Crp, 10.0),
        (Mg, 10.0),
    ],
};

pub const VITALITY: CategoryDef = CategoryDef {
    id: CategoryId::Vitality,
    emoji: "⚡",
    name: "Vitality",
    label: "Can your energy tank run at full power from the morning on?",
    weights: &[
        (Mg, 15.0),
        (HbA1c, 13.0),
        (Tp, 10.0),
        (Alb, 10.0),
        (Crp, 10.0),
        (Fe, 9.0),
        (Ferritin, 9.0),
        (Ggt, 7.0),
        (Ast, 6.0),
        (Alt, 6.0),
        (PAlb, 5.0),
    ],
};

pub const HEART: CategoryDef = CategoryDef {
    id: CategoryId::Heart,
    emoji: "❤️‍🩹",
    name: "Heart",
    label: "How much headroom do your heart and vessels have?",
    weights: &[
        (HbA1c, 20.0),
        (Ldl, 20.0),
        (Tg, 15.0),
        (Tcho, 15.0),
        (Hdl, 10.0),
        (Crp, 10.0),
        (Ua, 5.0),
        (Mg, 5.0),
    ],
};

pub const LIVER: CategoryDef = CategoryDef {
    id: CategoryId::Liver,
    emoji: "🫘",
    name: "Liver",
    label: "How much slack is left in your liver's processing capacity?",
    weights: &[
        (Ast, 25.0),
        (Alt, 25.0),
        (Ggt, 20.0),
        (Alp, 10.0),
        (TBil, 10.0),
        (DBil, 10.0),
    ],
};

pub const LIFESTYLE: CategoryDef = CategoryDef {
    id: CategoryId::Lifestyle,
    emoji: "📊",
    name: "Lifestyle",
    label: "How kind, or how harsh, is your current lifestyle on your body?",
    weights: &[
        (HbA1c, 14.0),
        (Tg, 9.0),
        (Hdl, 9.0),
        (Ldl, 9.0),
        (Tcho, 9.0),
        (Ast, 7.0),
        (Alt, 7.0),
        (Ggt, 7.0),
        (Crp, 7.0),
        (Tp, 5.0),
        (Alb, 5.0),
        (Ua, 4.0),
        (Bun, 4.0),
        (Cre, 4.0),
    ],
};

/// The 14 lifestyle category definitions, in [`CategoryId::ALL`] order.
pub const CATEGORY_DEFINITIONS: &[CategoryDef] = &[
    DIET,
    SLEEP,
    RECOVERY,
    PERFORMANCE,
    STRESS,
    ANTIOXIDANT,
    COGNITION,
    APPEARANCE,
    SKIN,
    SEXUAL,
    VITALITY,
    HEART,
    LIVER,
    LIFESTYLE,
];

pub fn category_def(id: CategoryId) -> &'static CategoryDef {
    match id {
        CategoryId::Diet => &DIET,
        CategoryId::Sleep => &SLEEP,
        CategoryId::Recovery => &RECOVERY,
        CategoryId::Performance => &PERFORMANCE,
        CategoryId::Stress => &STRESS,
        CategoryId::Antioxidant => &ANTIOXIDANT,
        CategoryId::Cognition => &COGNITION,
        CategoryId::Appearance => &APPEARANCE,
        CategoryId::Skin => &SKIN,
        CategoryId::Sexual => &SEXUAL,
        CategoryId::Vitality => &VITALITY,
        CategoryId::Heart => &HEART,
        CategoryId::Liver => &LIVER,
        CategoryId::Lifestyle => &LIFESTYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourteen_categories() {
        assert_eq!(CATEGORY_DEFINITIONS.len(), 14);
        for id in CategoryId::ALL {
            assert_eq!(category_def(id).id, id);
        }
    }

    #[test]
    fn test_definitions_follow_id_order() {
        for (def, id) in CATEGORY_DEFINITIONS.iter().zip(CategoryId::ALL) {
            assert_eq!(def.id, id);
        }
    }

    #[test]
    fn test_no_duplicate_markers_within_category() {
        for def in CATEGORY_DEFINITIONS {
            let mut seen = std::collections::HashSet::new();
            for (marker, _) in def.weights {
                assert!(
                    seen.insert(marker),
                    "marker {marker:?} listed twice in {:?}",
                    def.id
                );
            }
        }
    }

    #[test]
    fn test_liver_weights() {
        let liver = category_def(CategoryId::Liver);
        let total: f64 = liver.weights.iter().map(|&(_, w)| w).sum();
        assert_eq!(total, 100.0);
        assert_eq!(liver.weights[0], (MarkerId::Ast, 25.0));
    }
}
