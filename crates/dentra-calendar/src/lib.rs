//! dentra-calendar
//!
//! Pure projections of the appointment book onto a monthly grid, a
//! selected day's agenda, and today's working schedule. Everything here
//! is a function of its inputs; the crate holds no state and performs
//! no I/O.

pub mod grid;
pub mod select;
pub mod today;

pub use grid::{DayCell, MonthGrid, month_grid};
pub use select::{DaySelection, appointments_on, default_selection};
pub use today::{DashboardAction, ScheduleEntry, todays_schedule};
