use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Maximum window length in days (10 years).
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// A contiguous, inclusive range of calendar days, oldest first.
///
/// Deserialization goes through [`DateWindow::new`], so a reversed or
/// oversized window is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unchecked wire form of a [`DateWindow`].
#[derive(Deserialize)]
struct RawWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawWindow> for DateWindow {
    type Error = CoreError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        DateWindow::new(raw.start, raw.end)
    }
}

impl DateWindow {
    /// Window from `start` to `end`, both inclusive.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidWindow(format!(
                "start ({start}) must not be after end ({end})"
            )));
        }
        let span = (end - start).num_days() + 1;
        if span > MAX_WINDOW_DAYS {
            return Err(CoreError::InvalidWindow(format!(
                "window of {span} days exceeds maximum of {MAX_WINDOW_DAYS} days"
            )));
        }
        Ok(Self { start, end })
    }

    /// The `days`-long window ending on `end` (e.g. the last 7 days including today).
    pub fn trailing(end: NaiveDate, days: u32) -> Result<Self, CoreError> {
        if days == 0 {
            return Err(CoreError::InvalidWindow(
                "trailing window must cover at least one day".into(),
            ));
        }
        let start = end
            .checked_sub_signed(Duration::days(i64::from(days) - 1))
            .ok_or_else(|| CoreError::InvalidWindow(format!("{days} days before {end} is out of range")))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered; at least 1 for any window built by `new`.
    pub fn len(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every day in the window, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.len())
    }
}
