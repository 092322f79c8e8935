//! Validation and payload building for attendance and break corrections.
//!
//! Every correction needs a free-text reason and consistent clock values.
//! Both are checked before any request is sent; a validation failure is shown
//! to the operator and nothing reaches the backend.

use crate::libs::clock::{clock_to_minutes, duration_to_minutes, minutes_to_clock, parse_clock};
use crate::libs::records::{AttendanceRecord, AttendanceStatus, BreakSession};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("an edit reason is required")]
    MissingReason,
    #[error("'{0}' is not a valid HH:MM time")]
    InvalidClock(String),
    #[error("end time {end} must be later than start time {start}")]
    EndBeforeStart { start: String, end: String },
    #[error("no fields were changed")]
    NothingToChange,
}

/// A single before/after field difference, as shown in the confirmation
/// preview and recorded in the edit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Requested changes to one attendance record. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct AttendanceEdit {
    pub check_in: Option<String>,
    pub break_in: Option<String>,
    pub break_out: Option<String>,
    pub check_out: Option<String>,
    /// Overtime as an "H:MM" duration.
    pub overtime: Option<String>,
    pub status: Option<AttendanceStatus>,
    pub reason: String,
}

impl AttendanceEdit {
    pub fn validate(&self, record: &AttendanceRecord) -> Result<(), ValidationError> {
        if self.reason.trim().is_empty() {
            return Err(ValidationError::MissingReason);
        }

        for value in [&self.check_in, &self.break_in, &self.break_out, &self.check_out].into_iter().flatten() {
            if parse_clock(value).is_none() {
                return Err(ValidationError::InvalidClock(value.clone()));
            }
        }
        if let Some(overtime) = &self.overtime {
            if duration_to_minutes(overtime).is_none() {
                return Err(ValidationError::InvalidClock(overtime.clone()));
            }
        }

        // The effective window after the edit must still be ordered.
        let current = |ts: &Option<DateTime<Utc>>| ts.map(|t| t.format("%H:%M").to_string());
        let check_in = self.check_in.clone().or_else(|| current(&record.check_in));
        let check_out = self.check_out.clone().or_else(|| current(&record.check_out));
        if let (Some(start), Some(end)) = (check_in, check_out) {
            if let (Some(s), Some(e)) = (clock_to_minutes(&start), clock_to_minutes(&end)) {
                if e <= s {
                    return Err(ValidationError::EndBeforeStart { start, end });
                }
            }
        }

        if self.changes(record).is_empty() {
            return Err(ValidationError::NothingToChange);
        }
        Ok(())
    }

    /// Field-level differences against the stored record.
    pub fn changes(&self, record: &AttendanceRecord) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        let clock = |ts: &Option<DateTime<Utc>>| ts.map(|t| t.format("%H:%M").to_string());

        let clock_fields = [
            ("checkIn", &self.check_in, clock(&record.check_in)),
            ("breakIn", &self.break_in, clock(&record.break_in)),
            ("breakOut", &self.break_out, clock(&record.break_out)),
            ("checkOut", &self.check_out, clock(&record.check_out)),
        ];
        for (field, requested, stored) in clock_fields {
            if let Some(requested) = requested {
                let normalized = normalize_clock(requested);
                if stored.as_deref() != Some(normalized.as_str()) {
                    changes.push(FieldChange {
                        field: field.to_string(),
                        old_value: stored,
                        new_value: Some(normalized),
                    });
                }
            }
        }

        if let Some(overtime) = &self.overtime {
            let stored = (record.overtime * 60.0).round() as i64;
            let requested = duration_to_minutes(overtime);
            if requested != Some(stored) {
                changes.push(FieldChange {
                    field: "overtime".to_string(),
                    old_value: Some(minutes_to_clock(stored)),
                    new_value: Some(requested.map(minutes_to_clock).unwrap_or_else(|| overtime.clone())),
                });
            }
        }

        if let Some(status) = self.status {
            if status != record.status {
                changes.push(FieldChange {
                    field: "status".to_string(),
                    old_value: Some(record.status.as_wire().to_string()),
                    new_value: Some(status.as_wire().to_string()),
                });
            }
        }

        changes
    }

    /// JSON body for the PATCH request. Clock values become UTC timestamps on
    /// the record's date.
    pub fn to_payload(&self, date: NaiveDate) -> Value {
        let mut body = Map::new();
        let fields = [
            ("checkIn", &self.check_in),
            ("breakIn", &self.break_in),
            ("breakOut", &self.break_out),
            ("checkOut", &self.check_out),
        ];
        for (field, value) in fields {
            if let Some(ts) = value.as_deref().and_then(|v| clock_on_date(date, v)) {
                body.insert(field.to_string(), Value::String(ts.to_rfc3339()));
            }
        }
        if let Some(minutes) = self.overtime.as_deref().and_then(duration_to_minutes) {
            body.insert("overtime".to_string(), Value::from(minutes as f64 / 60.0));
        }
        if let Some(status) = self.status {
            body.insert("status".to_string(), Value::String(status.as_wire().to_string()));
        }
        body.insert("editReason".to_string(), Value::String(self.reason.trim().to_string()));
        Value::Object(body)
    }
}

/// Requested correction of a break window.
#[derive(Debug, Clone, Default)]
pub struct BreakEdit {
    pub start: Option<String>,
    pub end: Option<String>,
    pub reason: String,
}

impl BreakEdit {
    pub fn validate(&self, session: &BreakSession) -> Result<(), ValidationError> {
        if self.reason.trim().is_empty() {
            return Err(ValidationError::MissingReason);
        }
        if self.start.is_none() && self.end.is_none() {
            return Err(ValidationError::NothingToChange);
        }
        for value in [&self.start, &self.end].into_iter().flatten() {
            if parse_clock(value).is_none() {
                return Err(ValidationError::InvalidClock(value.clone()));
            }
        }

        let start = self.start.clone().unwrap_or_else(|| session.start_time.format("%H:%M").to_string());
        let end = self.end.clone().or_else(|| session.end_time.map(|t| t.format("%H:%M").to_string()));
        if let Some(end) = end {
            if let (Some(s), Some(e)) = (clock_to_minutes(&start), clock_to_minutes(&end)) {
                if e <= s {
                    return Err(ValidationError::EndBeforeStart { start, end });
                }
            }
        }
        Ok(())
    }

    pub fn to_payload(&self, date: NaiveDate) -> Value {
        let mut body = Map::new();
        if let Some(ts) = self.start.as_deref().and_then(|v| clock_on_date(date, v)) {
            body.insert("startTime".to_string(), Value::String(ts.to_rfc3339()));
        }
        if let Some(ts) = self.end.as_deref().and_then(|v| clock_on_date(date, v)) {
            body.insert("endTime".to_string(), Value::String(ts.to_rfc3339()));
        }
        body.insert("reason".to_string(), Value::String(self.reason.trim().to_string()));
        Value::Object(body)
    }
}

/// Removal of an attendance record or break. Only the reason is sent.
#[derive(Debug, Clone, Default)]
pub struct DeleteRequest {
    pub reason: String,
}

impl DeleteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reason.trim().is_empty() {
            return Err(ValidationError::MissingReason);
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Value {
        let mut body = Map::new();
        body.insert("reason".to_string(), Value::String(self.reason.trim().to_string()));
        Value::Object(body)
    }
}

fn normalize_clock(value: &str) -> String {
    parse_clock(value).map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| value.to_string())
}

/// Places a wall-clock reading on `date` in UTC.
pub fn clock_on_date(date: NaiveDate, value: &str) -> Option<DateTime<Utc>> {
    parse_clock(value).map(|time| date.and_time(time).and_utc())
}
