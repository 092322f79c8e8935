//! Client-side selection of records: date windows, search and pagination.

use crate::libs::pay_cycle::PayCycle;
use crate::libs::records::{
    AttendanceRecord, AttendanceStatus, BreakSession, FlowaceRecord, Penalty, Warning, WorkLog,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Whether `at` falls inside `[start, end]`, with `end` inclusive through the
/// last millisecond of that calendar day.
pub fn in_range(at: NaiveDateTime, start: NaiveDate, end: NaiveDate) -> bool {
    date_in_range(at.date(), start, end)
}

pub fn date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Records that belong to a single calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Records tied to one employee.
pub trait EmployeeScoped {
    fn employee_id(&self) -> &str;
    fn employee_name(&self) -> Option<&str>;
}

macro_rules! impl_scoped_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dated for $ty {
                fn date(&self) -> NaiveDate {
                    self.date
                }
            }

            impl EmployeeScoped for $ty {
                fn employee_id(&self) -> &str {
                    &self.employee_id
                }

                fn employee_name(&self) -> Option<&str> {
                    self.employee_name.as_deref()
                }
            }
        )*
    };
}

impl_scoped_record!(AttendanceRecord, BreakSession, WorkLog, Warning, Penalty, FlowaceRecord);

/// Keeps the records dated inside `cycle`.
pub fn within_cycle<'a, T: Dated>(records: &'a [T], cycle: &PayCycle) -> Vec<&'a T> {
    records.iter().filter(|r| cycle.contains(r.date())).collect()
}

/// Search criteria the list views apply on top of the date window.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Exact employee id.
    pub employee_id: Option<String>,
    /// Case-insensitive substring of the employee name or id.
    pub search: Option<String>,
    pub status: Option<AttendanceStatus>,
}

impl RecordFilter {
    pub fn matches<T: EmployeeScoped>(&self, record: &T) -> bool {
        if let Some(id) = &self.employee_id {
            if record.employee_id() != id {
                return false;
            }
        }
        if let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            let name_hit = record.employee_name().map(|n| n.to_lowercase().contains(&needle)).unwrap_or(false);
            if !name_hit && !record.employee_id().to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    pub fn matches_attendance(&self, record: &AttendanceRecord) -> bool {
        self.status.map_or(true, |s| record.status == s) && self.matches(record)
    }
}

/// One page of a client-side paginated list.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slices `items` into the requested 1-based page.
///
/// Page 0 is treated as page 1 and `per_page == 0` as a page size of 1. A
/// page past the end is returned empty with the real totals.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let slice = if start >= total_items {
        Vec::new()
    } else {
        items[start..(start + per_page).min(total_items)].to_vec()
    };

    Page {
        items: slice,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
