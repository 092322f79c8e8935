//! Client-side export of already-fetched records.
//!
//! Exports are produced from the records a view has loaded; no further
//! requests are made. Clock values and durations are written as "HH:MM"
//! strings so the files read the same as the tables on screen.
//!
//! ## Features
//!
//! - **Export Formats**: CSV, JSON, Excel with bold headers and auto-sized columns
//! - **Data Types**: Attendance rows, break sessions, per-employee cycle summary
//! - **File Naming**: `paydesk_<data>_<YYYYMMDD_HHMMSS>.<ext>` when no path is given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paydesk::libs::export::{ExportData, ExportDataset, ExportFormat, Exporter};
//! use paydesk::libs::pay_cycle::PayCycle;
//! use chrono::Local;
//!
//! let cycle = PayCycle::current(Local::now().date_naive())?;
//! let dataset = ExportDataset::new(cycle);
//! let exporter = Exporter::new(ExportFormat::Csv, ExportData::Attendance, None);
//! exporter.export(&dataset)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::aggregate::{format_percentage, summarize_by_employee, sum_break_minutes, AttendanceStats};
use crate::libs::clock::{decimal_hours_to_clock, minutes_to_clock};
use crate::libs::duration::ShiftClock;
use crate::libs::pay_cycle::PayCycle;
use crate::libs::records::{AttendanceRecord, BreakSession};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// One row per employee-day with computed net duration.
    Attendance,
    /// One row per break session.
    Breaks,
    /// Per-employee totals for the cycle.
    Summary,
}

impl ExportData {
    fn slug(&self) -> &'static str {
        match self {
            ExportData::Attendance => "attendance",
            ExportData::Breaks => "breaks",
            ExportData::Summary => "summary",
        }
    }
}

/// Records loaded for one pay cycle.
#[derive(Debug, Clone)]
pub struct ExportDataset {
    pub cycle: PayCycle,
    pub attendance: Vec<AttendanceRecord>,
    pub breaks: Vec<BreakSession>,
}

impl ExportDataset {
    pub fn new(cycle: PayCycle) -> Self {
        Self {
            cycle,
            attendance: Vec::new(),
            breaks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportAttendanceRow {
    pub date: String,
    pub employee_id: String,
    pub employee_name: String,
    pub status: String,
    pub check_in: String,
    pub break_in: String,
    pub break_out: String,
    pub check_out: String,
    pub break_duration: String,
    pub overtime: String,
    pub net_duration: String,
    pub total_hours: String,
    pub edited: bool,
}

impl ExportAttendanceRow {
    pub fn from_record(record: &AttendanceRecord) -> Self {
        let shift = ShiftClock::from_record(record);
        let text = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            employee_id: record.employee_id.clone(),
            employee_name: record.display_name().to_string(),
            status: record.status.to_string(),
            check_in: text(&shift.check_in),
            break_in: text(&shift.break_in),
            break_out: text(&shift.break_out),
            check_out: text(&shift.check_out),
            break_duration: minutes_to_clock(shift.break_minutes()),
            overtime: decimal_hours_to_clock(record.overtime),
            net_duration: shift.net_duration(),
            total_hours: decimal_hours_to_clock(record.total_hours),
            edited: record.has_been_edited,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportBreakRow {
    pub date: String,
    pub employee_id: String,
    pub employee_name: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub status: String,
}

impl ExportBreakRow {
    pub fn from_session(session: &BreakSession) -> Self {
        Self {
            date: session.date.format("%Y-%m-%d").to_string(),
            employee_id: session.employee_id.clone(),
            employee_name: session.display_name().to_string(),
            start: session.start_time.format("%H:%M").to_string(),
            end: session.end_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".to_string()),
            duration: session.duration_minutes().map(minutes_to_clock).unwrap_or_else(|| "--:--".to_string()),
            status: session.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummaryRow {
    pub employee_id: String,
    pub employee_name: String,
    pub days: usize,
    pub attended: usize,
    pub absent: usize,
    pub late: usize,
    pub leave: usize,
    pub attendance_rate: String,
    pub total_hours: String,
    pub overtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub cycle: String,
    pub rows: Vec<ExportSummaryRow>,
    pub total_hours: String,
    pub total_overtime: String,
    pub total_break_time: String,
    pub attendance_rate: String,
}

impl ExportSummary {
    pub fn from_dataset(dataset: &ExportDataset) -> Self {
        let rows = summarize_by_employee(&dataset.attendance)
            .into_iter()
            .map(|summary| ExportSummaryRow {
                employee_id: summary.employee_id,
                employee_name: summary.employee_name,
                days: summary.stats.total_days,
                attended: summary.stats.attended(),
                absent: summary.stats.absent,
                late: summary.stats.late,
                leave: summary.stats.leave,
                attendance_rate: format_percentage(summary.stats.attendance_rate()),
                total_hours: decimal_hours_to_clock(summary.stats.total_hours),
                overtime: decimal_hours_to_clock(summary.stats.total_overtime),
            })
            .collect();
        let overall = AttendanceStats::from_records(&dataset.attendance);

        Self {
            cycle: dataset.cycle.label(),
            rows,
            total_hours: decimal_hours_to_clock(overall.total_hours),
            total_overtime: decimal_hours_to_clock(overall.total_overtime),
            total_break_time: minutes_to_clock(sum_break_minutes(&dataset.breaks)),
            attendance_rate: format_percentage(overall.attendance_rate()),
        }
    }
}

const ATTENDANCE_HEADERS: [&str; 13] = [
    "Date",
    "Employee ID",
    "Employee",
    "Status",
    "Check In",
    "Break In",
    "Break Out",
    "Check Out",
    "Break",
    "Overtime",
    "Net Duration",
    "Total Hours",
    "Edited",
];
const BREAK_HEADERS: [&str; 7] = ["Date", "Employee ID", "Employee", "Start", "End", "Duration", "Status"];
const SUMMARY_HEADERS: [&str; 10] = [
    "Employee ID",
    "Employee",
    "Days",
    "Attended",
    "Absent",
    "Late",
    "Leave",
    "Attendance",
    "Hours",
    "Overtime",
];

fn attendance_fields(row: &ExportAttendanceRow) -> Vec<String> {
    vec![
        row.date.clone(),
        row.employee_id.clone(),
        row.employee_name.clone(),
        row.status.clone(),
        row.check_in.clone(),
        row.break_in.clone(),
        row.break_out.clone(),
        row.check_out.clone(),
        row.break_duration.clone(),
        row.overtime.clone(),
        row.net_duration.clone(),
        row.total_hours.clone(),
        if row.edited { "Yes".to_string() } else { "No".to_string() },
    ]
}

fn break_fields(row: &ExportBreakRow) -> Vec<String> {
    vec![
        row.date.clone(),
        row.employee_id.clone(),
        row.employee_name.clone(),
        row.start.clone(),
        row.end.clone(),
        row.duration.clone(),
        row.status.clone(),
    ]
}

fn summary_fields(row: &ExportSummaryRow) -> Vec<String> {
    vec![
        row.employee_id.clone(),
        row.employee_name.clone(),
        row.days.to_string(),
        row.attended.to_string(),
        row.absent.to_string(),
        row.late.to_string(),
        row.leave.to_string(),
        row.attendance_rate.clone(),
        row.total_hours.clone(),
        row.overtime.clone(),
    ]
}

/// Writes one export file in the requested format.
pub struct Exporter {
    format: ExportFormat,
    data: ExportData,
    output_path: PathBuf,
}

impl Exporter {
    /// Uses `output_path` when given, otherwise a timestamped file name in the
    /// working directory.
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "paydesk_{}_{}.{}",
                data.slug(),
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });
        Self { format, data, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the file and returns its path.
    pub fn export(&self, dataset: &ExportDataset) -> Result<PathBuf> {
        match self.data {
            ExportData::Attendance => {
                let rows: Vec<ExportAttendanceRow> = dataset.attendance.iter().map(ExportAttendanceRow::from_record).collect();
                let table: Vec<Vec<String>> = rows.iter().map(attendance_fields).collect();
                self.write(&format!("Attendance {}", dataset.cycle.label()), &ATTENDANCE_HEADERS, &table, &rows, &[])?;
            }
            ExportData::Breaks => {
                let rows: Vec<ExportBreakRow> = dataset.breaks.iter().map(ExportBreakRow::from_session).collect();
                let table: Vec<Vec<String>> = rows.iter().map(break_fields).collect();
                let footer = vec![("Total Break Time".to_string(), minutes_to_clock(sum_break_minutes(&dataset.breaks)))];
                self.write(&format!("Breaks {}", dataset.cycle.label()), &BREAK_HEADERS, &table, &rows, &footer)?;
            }
            ExportData::Summary => {
                let summary = ExportSummary::from_dataset(dataset);
                let table: Vec<Vec<String>> = summary.rows.iter().map(summary_fields).collect();
                let footer = vec![
                    ("Total Hours".to_string(), summary.total_hours.clone()),
                    ("Total Overtime".to_string(), summary.total_overtime.clone()),
                    ("Total Break Time".to_string(), summary.total_break_time.clone()),
                    ("Attendance Rate".to_string(), summary.attendance_rate.clone()),
                ];
                self.write(&format!("Summary {}", summary.cycle), &SUMMARY_HEADERS, &table, &summary, &footer)?;
            }
        }

        info!(path = %self.output_path.display(), format = ?self.format, data = ?self.data, "export written");
        Ok(self.output_path.clone())
    }

    fn write<S: Serialize + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        table: &[Vec<String>],
        json: &S,
        footer: &[(String, String)],
    ) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.write_csv(headers, table, footer),
            ExportFormat::Json => self.write_json(json),
            ExportFormat::Excel => self.write_excel(title, headers, table, footer),
        }
    }

    fn write_csv(&self, headers: &[&str], table: &[Vec<String>], footer: &[(String, String)]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record(headers)?;
        for row in table {
            wtr.write_record(row)?;
        }

        if !footer.is_empty() {
            wtr.write_record([""])?;
            for (label, value) in footer {
                wtr.write_record([label, value])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json<S: Serialize + ?Sized>(&self, value: &S) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_excel(&self, title: &str, headers: &[&str], table: &[Vec<String>], footer: &[(String, String)]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, title, &title_format)?;
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(2, col as u16, *header, &header_format)?;
        }

        let mut row = 3;
        for fields in table {
            for (col, value) in fields.iter().enumerate() {
                worksheet.write_string(row, col as u16, value)?;
            }
            row += 1;
        }

        if !footer.is_empty() {
            row += 1;
            for (label, value) in footer {
                worksheet.write_string_with_format(row, 0, label, &header_format)?;
                worksheet.write_string(row, 1, value)?;
                row += 1;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
