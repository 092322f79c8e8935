//! Pay-cycle window resolution.
//!
//! Salaries are computed over fixed monthly windows that run from the 6th of
//! one month through the 5th of the next, both days inclusive. Every
//! attendance, break and analytics view selects its records through one of
//! these windows.
//!
//! ## Anchor Month
//!
//! The cycle containing a date is anchored on that date's month when the day
//! is the 6th or later, otherwise on the previous month:
//!
//! ```text
//! 2025-03-10  ──▶  anchor March     ──▶  06 Mar 2025 .. 05 Apr 2025
//! 2025-03-03  ──▶  anchor February  ──▶  06 Feb 2025 .. 05 Mar 2025
//! ```
//!
//! Offsets shift the anchor by whole months, so consecutive cycles always
//! touch: the end of one cycle is exactly the day before the start of the
//! next.
//!
//! ```rust
//! use paydesk::libs::pay_cycle::PayCycle;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let cycle = PayCycle::current(today)?;
//! assert_eq!(cycle.label(), "6 Mar – 5 Apr 2025");
//! # Ok::<(), paydesk::libs::pay_cycle::CycleError>(())
//! ```

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First day of every cycle.
pub const CYCLE_START_DAY: u32 = 6;
/// Last day of every cycle, in the month after the start.
pub const CYCLE_END_DAY: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CycleError {
    #[error("pay cycle at offset {offset} is outside the supported date range")]
    OutOfRange { offset: i64 },
}

/// Relative cycle selection used by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CycleOffset {
    Previous,
    Current,
    Next,
}

impl CycleOffset {
    pub fn months(&self) -> i32 {
        match self {
            CycleOffset::Previous => -1,
            CycleOffset::Current => 0,
            CycleOffset::Next => 1,
        }
    }
}

/// An inclusive `[start, end]` pay-cycle window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayCycle {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayCycle {
    /// The cycle containing `today`.
    pub fn current(today: NaiveDate) -> Result<Self, CycleError> {
        Self::by_offset(today, 0)
    }

    /// The cycle `offset` months away from the one containing `today`.
    ///
    /// Negative offsets select earlier cycles, positive offsets later ones.
    pub fn by_offset(today: NaiveDate, offset: i32) -> Result<Self, CycleError> {
        let anchor_shift: i64 = if today.day() >= CYCLE_START_DAY { 0 } else { -1 };
        let month_index = today.year() as i64 * 12 + today.month0() as i64 + anchor_shift + offset as i64;
        Self::from_month_index(month_index).ok_or(CycleError::OutOfRange { offset: offset as i64 })
    }

    /// The cycle containing `date`; an alias of [`PayCycle::current`].
    pub fn containing(date: NaiveDate) -> Result<Self, CycleError> {
        Self::current(date)
    }

    /// Builds the cycle whose start lies in the given absolute month
    /// (`year * 12 + month0`).
    fn from_month_index(index: i64) -> Option<Self> {
        let start = date_in_month(index, CYCLE_START_DAY)?;
        let end = date_in_month(index + 1, CYCLE_END_DAY)?;
        Some(Self { start, end })
    }

    fn month_index(&self) -> i64 {
        self.start.year() as i64 * 12 + self.start.month0() as i64
    }

    pub fn next(&self) -> Result<Self, CycleError> {
        Self::from_month_index(self.month_index() + 1).ok_or(CycleError::OutOfRange { offset: 1 })
    }

    pub fn previous(&self) -> Result<Self, CycleError> {
        Self::from_month_index(self.month_index() - 1).ok_or(CycleError::OutOfRange { offset: -1 })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days in the window, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates over every date of the window in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days()).map(move |i| self.start + Duration::days(i))
    }

    pub fn label(&self) -> String {
        format_cycle_period(self.start, self.end)
    }
}

fn date_in_month(index: i64, day: u32) -> Option<NaiveDate> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Human-readable label for a window, e.g. `"6 Jan – 5 Feb 2025"`.
///
/// The start year is spelled out only when it differs from the end year.
pub fn format_cycle_period(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() == end.year() {
        format!("{} – {}", start.format("%-d %b"), end.format("%-d %b %Y"))
    } else {
        format!("{} – {}", start.format("%-d %b %Y"), end.format("%-d %b %Y"))
    }
}
