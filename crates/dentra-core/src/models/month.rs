use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A calendar month handle, always anchored at day 1 of the month.
///
/// Anchoring at the 1st before shifting months is what makes
/// `succ`/`pred` reversible: stepping back a month from March 31 must
/// never land on an invalid or overflowed February date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct MonthAnchor(Date);

impl MonthAnchor {
    pub fn new(year: i16, month: i8) -> Result<Self, CoreError> {
        Date::new(year, month, 1)
            .map(Self)
            .map_err(|_| CoreError::InvalidMonth { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: Date) -> Self {
        Self(date.first_of_month())
    }

    pub fn year(&self) -> i16 {
        self.0.year()
    }

    pub fn month(&self) -> i8 {
        self.0.month()
    }

    /// The 1st of the anchored month.
    pub fn first_day(&self) -> Date {
        self.0
    }

    /// The following month. Saturates at the calendar bounds.
    pub fn succ(&self) -> Self {
        Self(self.0.saturating_add(1.month()))
    }

    /// The preceding month. Saturates at the calendar bounds.
    pub fn pred(&self) -> Self {
        Self(self.0.saturating_sub(1.month()))
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.0.year() && date.month() == self.0.month()
    }

    /// Header label, e.g. "July 2024".
    pub fn label(&self) -> String {
        self.0.strftime("%B %Y").to_string()
    }
}

impl<'de> Deserialize<'de> for MonthAnchor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Normalize any day component so the day-1 invariant survives
        // round-trips through persisted session state.
        let date = Date::deserialize(deserializer)?;
        Ok(Self::from_date(date))
    }
}
