//! Net worked-time calculation for a single attendance day.
//!
//! Given the four clock readings of a day (check-in, break-in, break-out,
//! check-out) and an optional overtime offset, computes how long the employee
//! actually worked. All readings belong to the same calendar day.
//!
//! ## Calculation Rules
//!
//! 1. Without both a check-in and a check-out the day is `00:00`
//! 2. A check-out at or before the check-in is `00:00`; overnight shifts are
//!    not supported
//! 3. The break window is subtracted as an absolute difference, so the two
//!    break readings may be entered in either order
//! 4. A non-zero overtime offset is added on top
//! 5. The result never goes below zero
//!
//! Malformed readings never produce an error. A broken check-in or check-out
//! collapses the day to zero; a broken break or overtime reading is ignored.
//!
//! ```rust
//! use paydesk::libs::duration::calculate_work_duration;
//!
//! let worked = calculate_work_duration(Some("09:00"), Some("13:00"), Some("13:30"), Some("18:00"), Some("00:00"));
//! assert_eq!(worked, "08:30");
//! ```

use crate::libs::clock::{clock_to_minutes, decimal_hours_to_clock, duration_to_minutes, minutes_to_clock};
use crate::libs::records::AttendanceRecord;
use chrono::{DateTime, Utc};

/// Clock readings for one attendance day, each as an optional "HH:MM" string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftClock {
    pub check_in: Option<String>,
    pub break_in: Option<String>,
    pub break_out: Option<String>,
    pub check_out: Option<String>,
    pub overtime: Option<String>,
}

impl ShiftClock {
    pub fn new(check_in: &str, check_out: &str) -> Self {
        Self {
            check_in: Some(check_in.to_string()),
            check_out: Some(check_out.to_string()),
            ..Default::default()
        }
    }

    pub fn with_break(mut self, break_in: &str, break_out: &str) -> Self {
        self.break_in = Some(break_in.to_string());
        self.break_out = Some(break_out.to_string());
        self
    }

    pub fn with_overtime(mut self, overtime: &str) -> Self {
        self.overtime = Some(overtime.to_string());
        self
    }

    /// Builds the readings of a stored record as UTC wall-clock times.
    pub fn from_record(record: &AttendanceRecord) -> Self {
        let clock = |ts: &Option<DateTime<Utc>>| ts.map(|t| t.format("%H:%M").to_string());
        Self {
            check_in: clock(&record.check_in),
            break_in: clock(&record.break_in),
            break_out: clock(&record.break_out),
            check_out: clock(&record.check_out),
            overtime: (record.overtime > 0.0).then(|| decimal_hours_to_clock(record.overtime)),
        }
    }

    /// Length of the break window in minutes, or 0 when it is incomplete.
    pub fn break_minutes(&self) -> i64 {
        match (reading(&self.break_in), reading(&self.break_out)) {
            (Some(start), Some(end)) => (end - start).abs(),
            _ => 0,
        }
    }

    pub fn overtime_minutes(&self) -> i64 {
        self.overtime.as_deref().and_then(duration_to_minutes).unwrap_or(0)
    }

    /// Net worked minutes, never negative.
    pub fn net_minutes(&self) -> i64 {
        let (Some(check_in), Some(check_out)) = (reading(&self.check_in), reading(&self.check_out)) else {
            return 0;
        };
        if check_out <= check_in {
            return 0;
        }

        let mut worked = check_out - check_in;
        worked -= self.break_minutes();
        worked += self.overtime_minutes();

        worked.max(0)
    }

    /// Net worked time as "HH:MM".
    pub fn net_duration(&self) -> String {
        minutes_to_clock(self.net_minutes())
    }
}

fn reading(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(clock_to_minutes)
}

/// Net worked duration for loose string readings.
pub fn calculate_work_duration(
    check_in: Option<&str>,
    break_in: Option<&str>,
    break_out: Option<&str>,
    check_out: Option<&str>,
    overtime: Option<&str>,
) -> String {
    let owned = |v: Option<&str>| v.map(str::to_string);
    ShiftClock {
        check_in: owned(check_in),
        break_in: owned(break_in),
        break_out: owned(break_out),
        check_out: owned(check_out),
        overtime: owned(overtime),
    }
    .net_duration()
}
