use std::collections::HashMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use dentra_core::models::{MonthAnchor, Role};

/// The per-session view state: one instance per running client,
/// constructed at login and torn down at logout. Passed explicitly to
/// the controller and calendar — never ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub role: Role,
    /// The active section, `None` until the first navigation.
    pub current_section: Option<String>,
    /// Last active tab per section. Tab ids are only meaningful within
    /// their owning section; entries are never looked up across
    /// sections.
    pub current_tab: HashMap<String, String>,
    /// The month the calendar view is anchored on.
    pub calendar_month: MonthAnchor,
}

impl SessionState {
    /// Session state at login: resolved role, no section yet, calendar
    /// anchored on the current month.
    pub fn begin(role: Role, today: Date) -> Self {
        Self {
            role,
            current_section: None,
            current_tab: HashMap::new(),
            calendar_month: MonthAnchor::from_date(today),
        }
    }

    /// Teardown at logout: role forced to logged-out, everything else
    /// reset.
    pub fn end(&mut self) {
        self.role = Role::LoggedOut;
        self.current_section = None;
        self.current_tab.clear();
    }

    pub fn active_tab(&self, section_id: &str) -> Option<&str> {
        self.current_tab.get(section_id).map(String::as_str)
    }

    pub fn next_calendar_month(&mut self) {
        self.calendar_month = self.calendar_month.succ();
    }

    pub fn prev_calendar_month(&mut self) {
        self.calendar_month = self.calendar_month.pred();
    }
}
