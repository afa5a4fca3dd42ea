use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use dentra_core::models::{Appointment, AppointmentStatus};

/// The one-click action the dashboard offers for a schedule entry,
/// advancing the appointment through its working states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardAction {
    CheckIn,
    Complete,
}

/// One row of the dashboard's today list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub appointment: Appointment,
    pub action: DashboardAction,
}

/// The working schedule for `today`: appointments still in play
/// (pending, confirmed or checked in), ascending by time. Completed
/// and cancelled ones have left the day's workflow and are omitted.
pub fn todays_schedule(appointments: &[Appointment], today: Date) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = appointments
        .iter()
        .filter(|a| a.date == today && a.status.is_actionable_today())
        .map(|a| ScheduleEntry {
            appointment: a.clone(),
            action: match a.status {
                AppointmentStatus::CheckedIn => DashboardAction::Complete,
                _ => DashboardAction::CheckIn,
            },
        })
        .collect();
    entries.sort_by_key(|e| e.appointment.time);
    entries
}
