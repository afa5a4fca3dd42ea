use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One historical dental-charting record for a patient.
///
/// Teeth are FDI two-digit notation kept as strings, matching the chart
/// UI's tooth ids.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartEntry {
    pub date: Date,
    pub teeth: Vec<String>,
    pub treatment_type: String,
    pub notes: String,
}
