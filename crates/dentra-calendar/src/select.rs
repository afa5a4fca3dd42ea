use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use dentra_core::models::Appointment;

use crate::grid::MonthGrid;

/// The single selected day of the calendar view. Selecting a new day
/// replaces the previous selection; there is never more than one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySelection {
    selected: Option<Date>,
}

impl DaySelection {
    pub fn none() -> Self {
        Self { selected: None }
    }

    pub fn select(&mut self, date: Date) {
        self.selected = Some(date);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub fn is_selected(&self, date: Date) -> bool {
        self.selected == Some(date)
    }
}

/// The agenda for one day: every appointment on `date`, ascending by
/// time of day. Cancelled appointments are included here — a user
/// inspecting a specific day must see cancellations, even though the
/// month overview's activity dot ignores them.
pub fn appointments_on<'a>(date: Date, appointments: &'a [Appointment]) -> Vec<&'a Appointment> {
    let mut on_day: Vec<&Appointment> = appointments.iter().filter(|a| a.date == date).collect();
    // Stable sort: equal times keep insertion order, status plays no
    // part in ordering within a day.
    on_day.sort_by_key(|a| a.time);
    on_day
}

/// The day to select when a month is first rendered: the real today if
/// it falls in the month, else the 1st, else the first in-month cell.
/// `None` means the caller shows an explicit "select a date" empty
/// state rather than selecting nothing silently.
pub fn default_selection(grid: &MonthGrid) -> Option<Date> {
    grid.cells
        .iter()
        .find(|c| c.is_today)
        .or_else(|| grid.in_month_cells().find(|c| c.date.day() == 1))
        .or_else(|| grid.in_month_cells().next())
        .map(|c| c.date)
}
