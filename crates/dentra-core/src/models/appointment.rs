use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A scheduled visit. `date` and `time` are clinic-local civil values;
/// no timezone math happens anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    /// Clinic area label, e.g. "Women's Section".
    pub section: String,
    pub treatment: String,
    pub doctor_id: Option<String>,
    pub doctor_name: String,
    pub date: Date,
    pub time: Time,
    pub status: AppointmentStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Whether this appointment counts toward a calendar day's activity
    /// indicator. Cancelled appointments are excluded from the month
    /// overview but still shown when a day is inspected directly.
    pub fn counts_as_activity(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }

    /// Whether this appointment belongs on the "today" dashboard list,
    /// which only shows visits still awaiting reception action.
    pub fn is_actionable_today(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending
                | AppointmentStatus::Confirmed
                | AppointmentStatus::CheckedIn
        )
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::CheckedIn => "Checked In",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}
