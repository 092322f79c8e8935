//! Typed records returned by the back-office API.
//!
//! Every list endpoint answers with a `{ "data": [...] }` envelope and single
//! resources with `{ "data": {...} }`. Field names are camelCase on the wire.
//! Records are display-oriented: the backend owns their lifecycle and the
//! client only reads them and requests mutations.
//!
//! Timestamps are UTC and carry wall-clock semantics: a check-in stored as
//! `2025-03-10T09:00:00Z` is displayed as `09:00` regardless of the local
//! timezone of the operator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Envelope for single-resource endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiItem<T> {
    pub data: T,
}

/// Attendance state for a single employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
    LeaveApproved,
    WfhApproved,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 6] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::HalfDay,
        AttendanceStatus::LeaveApproved,
        AttendanceStatus::WfhApproved,
    ];

    /// Whether the employee counts as having attended on this day.
    pub fn is_attended(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::HalfDay | AttendanceStatus::WfhApproved
        )
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Late => "LATE",
            AttendanceStatus::HalfDay => "HALF_DAY",
            AttendanceStatus::LeaveApproved => "LEAVE_APPROVED",
            AttendanceStatus::WfhApproved => "WFH_APPROVED",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::HalfDay => "Half day",
            AttendanceStatus::LeaveApproved => "Leave (approved)",
            AttendanceStatus::WfhApproved => "WFH (approved)",
        };
        f.write_str(label)
    }
}

/// Who performed an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditActor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// One audited field change. Entries are never modified once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditHistoryEntry {
    pub field: String,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
    #[serde(default)]
    pub reason: String,
    pub edited_by: EditActor,
    pub edited_at: DateTime<Utc>,
}

/// Append-only, chronologically ordered edit trail.
///
/// The inner vector is private: entries can be appended and read, but an
/// existing entry can never be replaced or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditHistory(Vec<EditHistoryEntry>);

impl EditHistory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an entry, keeping the trail ordered by `edited_at`.
    ///
    /// An entry older than the current tail is placed after every entry with
    /// an earlier or equal timestamp, so equal timestamps keep arrival order.
    pub fn append(&mut self, entry: EditHistoryEntry) {
        let position = self.0.partition_point(|existing| existing.edited_at <= entry.edited_at);
        self.0.insert(position, entry);
    }

    pub fn entries(&self) -> &[EditHistoryEntry] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditHistoryEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn latest(&self) -> Option<&EditHistoryEntry> {
        self.0.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub employee_code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// One employee-day of attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub break_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub break_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    /// Hours worked as reported by the backend, in decimal hours.
    #[serde(default)]
    pub total_hours: f64,
    /// Overtime in decimal hours.
    #[serde(default)]
    pub overtime: f64,
    #[serde(default)]
    pub has_been_edited: bool,
    #[serde(default)]
    pub edit_reason: Option<String>,
    #[serde(default)]
    pub edit_history: EditHistory,
}

impl AttendanceRecord {
    pub fn display_name(&self) -> &str {
        self.employee_name.as_deref().unwrap_or(&self.employee_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakStatus {
    Active,
    Completed,
}

impl fmt::Display for BreakStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakStatus::Active => f.write_str("Active"),
            BreakStatus::Completed => f.write_str("Completed"),
        }
    }
}

/// A single break taken by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakSession {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    pub status: BreakStatus,
    /// Duration in minutes as stored by the backend, if already computed.
    #[serde(default)]
    pub duration: Option<i64>,
}

impl BreakSession {
    /// Duration of a finished break in whole minutes.
    ///
    /// Prefers the stored value; otherwise derives it from the timestamps.
    /// Active breaks without an end time have no duration yet.
    pub fn duration_minutes(&self) -> Option<i64> {
        if let Some(minutes) = self.duration {
            return Some(minutes.max(0));
        }
        self.end_time.map(|end| (end - self.start_time).num_minutes().max(0))
    }

    /// Elapsed minutes at `now`, counting active breaks up to that instant.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        match self.status {
            BreakStatus::Active => (now - self.start_time).num_minutes().max(0),
            BreakStatus::Completed => self.duration_minutes().unwrap_or(0),
        }
    }

    pub fn display_name(&self) -> &str {
        self.employee_name.as_deref().unwrap_or(&self.employee_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Time attributed to one tag inside a work log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogTag {
    pub tag: String,
    pub minutes: i64,
}

/// An employee-submitted record of time spent per task category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<WorkLogTag>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl WorkLog {
    pub fn total_minutes(&self) -> i64 {
        self.entries.iter().map(|e| e.minutes.max(0)).sum()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningSeverity {
    Low,
    Medium,
    High,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningSeverity::Low => f.write_str("Low"),
            WarningSeverity::Medium => f.write_str("Medium"),
            WarningSeverity::High => f.write_str("High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub warning_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_severity")]
    pub severity: WarningSeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub break_id: Option<String>,
}

/// One day of productivity data imported from Flowace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowaceRecord {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub logged_hours: f64,
    #[serde(default)]
    pub active_hours: f64,
    #[serde(default)]
    pub idle_hours: f64,
    #[serde(default)]
    pub productive_hours: f64,
}

impl FlowaceRecord {
    /// Share of logged time that was productive, 0 when nothing was logged.
    pub fn productivity(&self) -> f64 {
        crate::libs::aggregate::percentage(self.productive_hours, self.logged_hours)
    }
}

fn default_true() -> bool {
    true
}

fn default_severity() -> WarningSeverity {
    WarningSeverity::Medium
}

/// Calendar dates sent either as `YYYY-MM-DD` or as an ISO datetime.
pub mod wire_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        let day = raw.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}
