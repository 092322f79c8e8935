//! Conversions between decimal hours, "HH:MM" clock strings and minutes.
//!
//! Attendance records arrive from the backend with hour totals stored as
//! decimal numbers (`8.5`) and clock times as timestamps, while every table,
//! form and export shows them as "HH:MM". This module is the single place
//! where those representations are converted.
//!
//! ## Format Specifications
//!
//! - Hours are zero-padded to two digits; counts of 100 and more are printed
//!   in full (`"152:30"`) so multi-month accumulations stay readable
//! - Minutes are zero-padded to two digits
//! - Zero, negative or non-finite input renders as `"00:00"`
//! - Unparseable text converts to `0` hours rather than failing
//!
//! ## Examples
//!
//! ```rust
//! use paydesk::libs::clock::{clock_to_decimal_hours, decimal_hours_to_clock};
//!
//! assert_eq!(decimal_hours_to_clock(8.5), "08:30");
//! assert_eq!(clock_to_decimal_hours("08:30"), 8.5);
//! assert_eq!(clock_to_decimal_hours("not a time"), 0.0);
//! ```

use chrono::{Duration, NaiveTime, Timelike};

/// Renders fractional hours as an "HH:MM" string.
///
/// The whole part becomes hours and the fraction is rounded to the nearest
/// minute. Values a hair below the next hour (e.g. `7.999997`) round to
/// `"07:60"`; callers that display accumulated totals see that verbatim.
///
/// # Examples
///
/// ```rust
/// use paydesk::libs::clock::decimal_hours_to_clock;
///
/// assert_eq!(decimal_hours_to_clock(0.0), "00:00");
/// assert_eq!(decimal_hours_to_clock(1.25), "01:15");
/// assert_eq!(decimal_hours_to_clock(152.5), "152:30");
/// ```
pub fn decimal_hours_to_clock(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "00:00".to_string();
    }

    let hours = value.floor();
    let minutes = ((value - hours) * 60.0).round() as i64;

    format!("{:02}:{:02}", hours as i64, minutes)
}

/// Parses an "HH:MM" string into fractional hours.
///
/// Hours are not limited to a single day, so `"37:45"` is `37.75`. Empty
/// strings, missing separators, non-numeric parts and minute values of 60 or
/// more all yield `0.0`.
pub fn clock_to_decimal_hours(text: &str) -> f64 {
    match duration_to_minutes(text) {
        Some(minutes) => minutes as f64 / 60.0,
        None => 0.0,
    }
}

/// Parses a wall-clock time of day.
///
/// Accepts "HH:MM" and "HH:MM:SS" with surrounding whitespace.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

/// Minutes since midnight for a same-day clock time.
pub fn clock_to_minutes(text: &str) -> Option<i64> {
    parse_clock(text).map(|t| (t.hour() * 60 + t.minute()) as i64)
}

/// Parses an "H:MM" duration whose hour part is unbounded.
///
/// Used for overtime offsets and hour totals, which are durations rather than
/// times of day.
pub fn duration_to_minutes(text: &str) -> Option<i64> {
    let (hours, minutes) = text.trim().split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;

    if hours < 0 || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Renders a minute count as "HH:MM", clamping negatives to zero.
pub fn minutes_to_clock(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a `chrono::Duration` into "HH:MM", dropping seconds.
///
/// # Examples
///
/// ```rust
/// use paydesk::libs::clock::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    minutes_to_clock(duration.num_minutes())
}
