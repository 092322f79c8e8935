//! Statistical reductions behind the summary cards and dashboards.
//!
//! Every reducer is a single pass over its input. Values stay as plain `f64`
//! until display; percentages are rounded only by [`format_percentage`].
//!
//! ## Attendance Rate
//!
//! ```text
//! rate = attended days / recorded days * 100
//!
//! attended = PRESENT + LATE + HALF_DAY + WFH_APPROVED
//! ```
//!
//! Approved leave is recorded but does not count as attended.

use crate::libs::records::{AttendanceRecord, AttendanceStatus, BreakSession, Penalty};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// `part` as a percentage of `total`; zero when the total is not positive.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Arithmetic mean, zero for an empty input.
pub fn average<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.into_iter().fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn count_by_status<'a, I>(records: I) -> BTreeMap<AttendanceStatus, usize>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }
    counts
}

pub fn sum_hours<'a, I: IntoIterator<Item = &'a AttendanceRecord>>(records: I) -> f64 {
    records.into_iter().map(|r| r.total_hours).sum()
}

pub fn sum_overtime<'a, I: IntoIterator<Item = &'a AttendanceRecord>>(records: I) -> f64 {
    records.into_iter().map(|r| r.overtime).sum()
}

/// Total minutes of finished breaks; active breaks contribute nothing.
pub fn sum_break_minutes<'a, I: IntoIterator<Item = &'a BreakSession>>(breaks: I) -> i64 {
    breaks.into_iter().filter_map(|b| b.duration_minutes()).sum()
}

/// Headline numbers for a set of attendance records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceStats {
    pub total_days: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub half_day: usize,
    pub leave: usize,
    pub wfh: usize,
    pub total_hours: f64,
    pub total_overtime: f64,
}

impl AttendanceStats {
    pub fn from_records<'a, I: IntoIterator<Item = &'a AttendanceRecord>>(records: I) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.add(record);
        }
        stats
    }

    fn add(&mut self, record: &AttendanceRecord) {
        self.total_days += 1;
        self.total_hours += record.total_hours;
        self.total_overtime += record.overtime;
        match record.status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::HalfDay => self.half_day += 1,
            AttendanceStatus::LeaveApproved => self.leave += 1,
            AttendanceStatus::WfhApproved => self.wfh += 1,
        }
    }

    pub fn attended(&self) -> usize {
        self.present + self.late + self.half_day + self.wfh
    }

    pub fn attendance_rate(&self) -> f64 {
        percentage(self.attended() as f64, self.total_days as f64)
    }

    /// Mean hours over attended days.
    pub fn average_hours(&self) -> f64 {
        if self.attended() == 0 {
            0.0
        } else {
            self.total_hours / self.attended() as f64
        }
    }
}

/// Per-employee statistics row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub employee_id: String,
    pub employee_name: String,
    pub stats: AttendanceStats,
}

/// Groups records by employee, sorted by name then id.
pub fn summarize_by_employee<'a, I: IntoIterator<Item = &'a AttendanceRecord>>(records: I) -> Vec<EmployeeSummary> {
    let mut by_employee: HashMap<&str, EmployeeSummary> = HashMap::new();
    for record in records {
        by_employee
            .entry(record.employee_id.as_str())
            .or_insert_with(|| EmployeeSummary {
                employee_id: record.employee_id.clone(),
                employee_name: record.display_name().to_string(),
                stats: AttendanceStats::default(),
            })
            .stats
            .add(record);
    }

    let mut rows: Vec<EmployeeSummary> = by_employee.into_values().collect();
    rows.sort_by(|a, b| a.employee_name.cmp(&b.employee_name).then_with(|| a.employee_id.cmp(&b.employee_id)));
    rows
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PenaltyTotals {
    pub count: usize,
    pub amount: f64,
}

impl PenaltyTotals {
    pub fn from_penalties<'a, I: IntoIterator<Item = &'a Penalty>>(penalties: I) -> Self {
        penalties.into_iter().fold(Self::default(), |acc, p| Self {
            count: acc.count + 1,
            amount: acc.amount + p.amount,
        })
    }
}
