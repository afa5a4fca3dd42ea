use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use dentra_core::models::{Appointment, MonthAnchor};

/// Cells per rendered month: six full weeks, Sunday through Saturday.
/// The count is fixed so the layout never reflows between months.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: Date,
    /// Whether the cell belongs to the anchored month. Out-of-month
    /// cells are filler and are never clickable.
    pub in_month: bool,
    pub is_today: bool,
    /// Whether the day carries at least one appointment that counts as
    /// activity (cancelled ones do not). Always false out of month.
    pub has_activity: bool,
}

/// A rendered month: header label plus exactly [`GRID_CELLS`] cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    pub label: String,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Cells belonging to the anchored month, in order.
    pub fn in_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.in_month)
    }
}

/// Project the appointment book onto the month anchored by `anchor`.
///
/// The grid starts on the Sunday on or before the 1st and runs for six
/// weeks, so the tail of the previous month and the head of the next
/// fill the corners. `is_today` and the activity dot are confined to
/// in-month cells.
pub fn month_grid(anchor: MonthAnchor, today: Date, appointments: &[Appointment]) -> MonthGrid {
    let first = anchor.first_day();
    let offset = first.weekday().to_sunday_zero_offset();
    let start = first.saturating_sub((offset as i64).days());

    let cells = (0..GRID_CELLS as i64)
        .map(|i| {
            let date = start.saturating_add(i.days());
            let in_month = anchor.contains(date);
            DayCell {
                date,
                in_month,
                is_today: in_month && date == today,
                has_activity: in_month && day_has_activity(date, appointments),
            }
        })
        .collect();

    MonthGrid {
        label: anchor.label(),
        cells,
    }
}

fn day_has_activity(date: Date, appointments: &[Appointment]) -> bool {
    appointments
        .iter()
        .any(|a| a.date == date && a.status.counts_as_activity())
}
