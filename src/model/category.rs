use serde::{Deserialize, Serialize};

/// Identifier of a blood biomarker contributing to lifestyle category scores.
///
/// Serialized forms match the lab-report keys ("AST", "GGT", "pAlb", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarkerId {
    #[serde(rename = "AST")]
    Ast,
    #[serde(rename = "ALT")]
    Alt,
    /// Gamma-GTP.
    #[serde(rename = "GGT")]
    Ggt,
    #[serde(rename = "ALP")]
    Alp,
    HbA1c,
    #[serde(rename = "TG")]
    Tg,
    #[serde(rename = "HDL")]
    Hdl,
    #[serde(rename = "LDL")]
    Ldl,
    /// Total cholesterol.
    #[serde(rename = "TCHO")]
    Tcho,
    Fe,
    #[serde(rename = "UIBC")]
    Uibc,
    Ferritin,
    #[serde(rename = "BUN")]
    Bun,
    Cre,
    #[serde(rename = "UA")]
    Ua,
    #[serde(rename = "TP")]
    Tp,
    Alb,
    /// Prealbumin.
    #[serde(rename = "pAlb")]
    PAlb,
    #[serde(rename = "CRP")]
    Crp,
    /// CK / CPK.
    #[serde(rename = "CK")]
    Ck,
    Mg,
    /// Total bilirubin.
    TBil,
    /// Direct bilirubin.
    DBil,
}

impl MarkerId {
    pub const ALL: [MarkerId; 23] = [
        MarkerId::Ast,
        MarkerId::Alt,
        MarkerId::Ggt,
        MarkerId::Alp,
        MarkerId::HbA1c,
        MarkerId::Tg,
        MarkerId::Hdl,
        MarkerId::Ldl,
        MarkerId::Tcho,
        MarkerId::Fe,
        MarkerId::Uibc,
        MarkerId::Ferritin,
        MarkerId::Bun,
        MarkerId::Cre,
        MarkerId::Ua,
        MarkerId::Tp,
        MarkerId::Alb,
        MarkerId::PAlb,
        MarkerId::Crp,
        MarkerId::Ck,
        MarkerId::Mg,
        MarkerId::TBil,
        MarkerId::DBil,
    ];

    /// Resolves a reading key to a biomarker, accepting the alias spellings
    /// lab exports use ("γ-GTP", "T-Cho", "CPK", "PreAlb", ...).
    pub fn from_key(key: &str) -> Option<MarkerId> {
        Some(match key {
            "AST" => MarkerId::Ast,
            "ALT" => MarkerId::Alt,
            "GGT" | "γ-GTP" => MarkerId::Ggt,
            "ALP" => MarkerId::Alp,
            "HbA1c" => MarkerId::HbA1c,
            "TG" => MarkerId::Tg,
            "HDL" => MarkerId::Hdl,
            "LDL" => MarkerId::Ldl,
            "TC" | "TCHO" | "T-Cho" => MarkerId::Tcho,
            "Fe" => MarkerId::Fe,
            "UIBC" => MarkerId::Uibc,
            "Ferritin" | "ferritin" => MarkerId::Ferritin,
            "BUN" => MarkerId::Bun,
            "Cre" | "CRE" => MarkerId::Cre,
            "UA" => MarkerId::Ua,
            "TP" => MarkerId::Tp,
            "Alb" | "ALB" => MarkerId::Alb,
            "pAlb" | "PreAlb" => MarkerId::PAlb,
            "CRP" => MarkerId::Crp,
            "CK" | "CPK" => MarkerId::Ck,
            "Mg" | "MG" => MarkerId::Mg,
            "TBil" | "T-Bil" | "TBIL" => MarkerId::TBil,
            "DBil" | "D-Bil" | "DBIL" => MarkerId::DBil,
            _ => return None,
        })
    }

    /// Id of the metric definition this biomarker normalizes through. Some
    /// markers (Fe, UIBC, pAlb, Mg, BUN, DBil) have no definition in the
    /// metric catalog; lookups for those return nothing.
    pub fn metric_id(self) -> &'static str {
        match self {
            MarkerId::Tcho => "TC",
            MarkerId::Ferritin => "ferritin",
            MarkerId::Cre => "CRE",
            MarkerId::Alb => "ALB",
            MarkerId::TBil => "TBIL",
            other => other.as_str(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerId::Ast => "AST",
            MarkerId::Alt => "ALT",
            MarkerId::Ggt => "GGT",
            MarkerId::Alp => "ALP",
            MarkerId::HbA1c => "HbA1c",
            MarkerId::Tg => "TG",
            MarkerId::Hdl => "HDL",
            MarkerId::Ldl => "LDL",
            MarkerId::Tcho => "TCHO",
            MarkerId::Fe => "Fe",
            MarkerId::Uibc => "UIBC",
            MarkerId::Ferritin => "Ferritin",
            MarkerId::Bun => "BUN",
            MarkerId::Cre => "Cre",
            MarkerId::Ua => "UA",
            MarkerId::Tp => "TP",
            MarkerId::Alb => "Alb",
            MarkerId::PAlb => "pAlb",
            MarkerId::Crp => "CRP",
            MarkerId::Ck => "CK",
            MarkerId::Mg => "Mg",
            MarkerId::TBil => "TBil",
            MarkerId::DBil => "DBil",
        }
    }
}

/// Identifier of a lifestyle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryId {
    Diet,
    Sleep,
    Recovery,
    Performance,
    Stress,
    Antioxidant,
    Cognition,
    Appearance,
    Skin,
    Sexual,
    Vitality,
    Heart,
    Liver,
    Lifestyle,
}

impl CategoryId {
    pub const ALL: [CategoryId; 14] = [
        CategoryId::Diet,
        CategoryId::Sleep,
        CategoryId::Recovery,
        CategoryId::Performance,
        CategoryId::Stress,
        CategoryId::Antioxidant,
        CategoryId::Cognition,
        CategoryId::Appearance,
        CategoryId::Skin,
        CategoryId::Sexual,
        CategoryId::Vitality,
        CategoryId::Heart,
        CategoryId::Liver,
        CategoryId::Lifestyle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Diet => "diet",
            CategoryId::Sleep => "sleep",
            CategoryId::Recovery => "recovery",
            CategoryId::Performance => "performance",
            CategoryId::Stress => "stress",
            CategoryId::Antioxidant => "antioxidant",
            CategoryId::Cognition => "cognition",
            CategoryId::Appearance => "appearance",
            CategoryId::Skin => "skin",
            CategoryId::Sexual => "sexual",
            CategoryId::Vitality => "vitality",
            CategoryId::Heart => "heart",
            CategoryId::Liver => "liver",
            CategoryId::Lifestyle => "lifestyle",
        }
    }
}

/// Static definition of one lifestyle category.
///
/// Weights are percentage-like and need not sum to 100; the category scorer
/// divides by the weight actually used.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub id: CategoryId,
    pub emoji: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub weights: &'static [(MarkerId, f64)],
}

/// Result of scoring one category. `score` is `None` when no contributing
/// marker was present.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub id: CategoryId,
    pub emoji: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub score: Option<f64>,
}
