//! Reporting period type.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range over which statements are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a new period. `start` must not be after `end`.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the period of equal length immediately preceding this one,
    /// used for prior-period comparison in statements.
    #[must_use]
    pub fn preceding(&self) -> Self {
        let len = self.end - self.start;
        let end = self.start - Duration::days(1);
        Self {
            start: end - len,
            end,
        }
    }
}
