use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A billable treatment. `value` is the stable key used by dropdowns,
/// invoices, and appointment records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Treatment {
    pub value: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_minutes: u32,
    pub category: TreatmentCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentCategory {
    Preventive,
    Restorative,
    Cosmetic,
    Surgical,
    Diagnostic,
    Orthodontic,
    Periodontal,
    Prosthodontics,
    Other,
}

impl TreatmentCategory {
    pub fn display_label(&self) -> &'static str {
        match self {
            TreatmentCategory::Preventive => "Preventive",
            TreatmentCategory::Restorative => "Restorative",
            TreatmentCategory::Cosmetic => "Cosmetic",
            TreatmentCategory::Surgical => "Surgical",
            TreatmentCategory::Diagnostic => "Diagnostic",
            TreatmentCategory::Orthodontic => "Orthodontic",
            TreatmentCategory::Periodontal => "Periodontal",
            TreatmentCategory::Prosthodontics => "Prosthodontics",
            TreatmentCategory::Other => "Unspecified",
        }
    }
}
