//! Terminal tables for the list and summary commands.

use super::aggregate::{format_percentage, AttendanceStats, EmployeeSummary, PenaltyTotals};
use super::clock::{decimal_hours_to_clock, minutes_to_clock};
use super::duration::ShiftClock;
use super::edit::FieldChange;
use super::pay_cycle::PayCycle;
use super::records::{
    AttendanceRecord, BreakSession, EditHistory, Employee, FlowaceRecord, Penalty, Tag, Warning, WorkLog,
};
use super::upload::UploadPreview;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use prettytable::{row, Table};

pub struct View {}

fn clock(ts: &Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".to_string())
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

impl View {
    pub fn cycles(cycles: &[PayCycle], today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PERIOD", "START", "END", "DAYS", ""]);
        for cycle in cycles {
            table.add_row(row![
                cycle.label(),
                cycle.start.format("%Y-%m-%d"),
                cycle.end.format("%Y-%m-%d"),
                cycle.days(),
                if cycle.contains(today) { "current" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn attendance(records: &[AttendanceRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "ID", "DATE", "EMPLOYEE", "STATUS", "IN", "BREAK IN", "BREAK OUT", "OUT", "OVERTIME", "NET", "EDITED"
        ]);
        for record in records {
            let shift = ShiftClock::from_record(record);
            table.add_row(row![
                record.id,
                record.date.format("%Y-%m-%d"),
                record.display_name(),
                record.status,
                clock(&record.check_in),
                clock(&record.break_in),
                clock(&record.break_out),
                clock(&record.check_out),
                decimal_hours_to_clock(record.overtime),
                shift.net_duration(),
                if record.has_been_edited { "*" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Audit trail of one record, oldest change first.
    pub fn edit_history(history: &EditHistory) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WHEN", "FIELD", "OLD", "NEW", "BY", "REASON"]);
        for entry in history.iter() {
            let actor = match (&entry.edited_by.name, &entry.edited_by.role) {
                (Some(name), Some(role)) => format!("{} ({})", name, role),
                (Some(name), None) => name.clone(),
                _ => entry.edited_by.id.clone(),
            };
            table.add_row(row![
                entry.edited_at.format("%Y-%m-%d %H:%M"),
                entry.field,
                opt(&entry.old_value),
                opt(&entry.new_value),
                actor,
                entry.reason
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn breaks(sessions: &[BreakSession], now: DateTime<Utc>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "EMPLOYEE", "START", "END", "DURATION", "STATUS"]);
        for session in sessions {
            table.add_row(row![
                session.id,
                session.date.format("%Y-%m-%d"),
                session.display_name(),
                session.start_time.format("%H:%M"),
                clock(&session.end_time),
                minutes_to_clock(session.elapsed_minutes(now)),
                session.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn changes(changes: &[FieldChange]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FIELD", "CURRENT", "NEW"]);
        for change in changes {
            table.add_row(row![change.field, opt(&change.old_value), opt(&change.new_value)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &AttendanceStats, break_minutes: i64, penalties: &PenaltyTotals) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Days", stats.total_days]);
        table.add_row(row!["Present", stats.present]);
        table.add_row(row!["Late", stats.late]);
        table.add_row(row!["Half day", stats.half_day]);
        table.add_row(row!["WFH", stats.wfh]);
        table.add_row(row!["Leave", stats.leave]);
        table.add_row(row!["Absent", stats.absent]);
        table.add_row(row!["Attendance rate", format_percentage(stats.attendance_rate())]);
        table.add_row(row!["Total hours", decimal_hours_to_clock(stats.total_hours)]);
        table.add_row(row!["Average hours", decimal_hours_to_clock(stats.average_hours())]);
        table.add_row(row!["Overtime", decimal_hours_to_clock(stats.total_overtime)]);
        table.add_row(row!["Break time", minutes_to_clock(break_minutes)]);
        table.add_row(row!["Penalties", format!("{} / {:.2}", penalties.count, penalties.amount)]);
        table.printstd();

        Ok(())
    }

    pub fn employee_summaries(summaries: &[EmployeeSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "DAYS", "ATTENDED", "ABSENT", "LATE", "RATE", "HOURS", "OVERTIME"]);
        for summary in summaries {
            table.add_row(row![
                summary.employee_name,
                summary.stats.total_days,
                summary.stats.attended(),
                summary.stats.absent,
                summary.stats.late,
                format_percentage(summary.stats.attendance_rate()),
                decimal_hours_to_clock(summary.stats.total_hours),
                decimal_hours_to_clock(summary.stats.total_overtime)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn upload_preview(preview: &UploadPreview) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "COLUMN"]);
        for (index, column) in preview.columns.iter().enumerate() {
            table.add_row(row![index + 1, column]);
        }
        table.printstd();

        Ok(())
    }

    pub fn warnings(warnings: &[Warning]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "EMPLOYEE", "TYPE", "SEVERITY", "MESSAGE"]);
        for warning in warnings {
            table.add_row(row![
                warning.date.format("%Y-%m-%d"),
                warning.employee_name.as_deref().unwrap_or(&warning.employee_id),
                warning.warning_type,
                warning.severity,
                warning.message
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn penalties(penalties: &[Penalty]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "EMPLOYEE", "AMOUNT", "REASON", "BREAK"]);
        for penalty in penalties {
            table.add_row(row![
                penalty.date.format("%Y-%m-%d"),
                penalty.employee_name.as_deref().unwrap_or(&penalty.employee_id),
                format!("{:.2}", penalty.amount),
                penalty.reason,
                opt(&penalty.break_id)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn work_logs(logs: &[WorkLog]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "EMPLOYEE", "TAGS", "TOTAL", "SUBMITTED"]);
        for log in logs {
            let tags = log
                .entries
                .iter()
                .map(|e| format!("{} {}", e.tag, minutes_to_clock(e.minutes)))
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(row![
                log.date.format("%Y-%m-%d"),
                log.employee_name.as_deref().unwrap_or(&log.employee_id),
                tags,
                minutes_to_clock(log.total_minutes()),
                if log.is_submitted() { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn flowace(records: &[FlowaceRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "EMPLOYEE", "LOGGED", "ACTIVE", "IDLE", "PRODUCTIVE", "PRODUCTIVITY"]);
        for record in records {
            table.add_row(row![
                record.date.format("%Y-%m-%d"),
                record.employee_name.as_deref().unwrap_or(&record.employee_id),
                decimal_hours_to_clock(record.logged_hours),
                decimal_hours_to_clock(record.active_hours),
                decimal_hours_to_clock(record.idle_hours),
                decimal_hours_to_clock(record.productive_hours),
                format_percentage(record.productivity())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "CODE", "NAME", "DEPARTMENT", "EMAIL", "ACTIVE"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                opt(&employee.employee_code),
                employee.name,
                opt(&employee.department),
                opt(&employee.email),
                if employee.is_active { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tags(tags: &[Tag]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ACTIVE"]);
        for tag in tags {
            table.add_row(row![tag.id, tag.name, if tag.is_active { "yes" } else { "no" }]);
        }
        table.printstd();

        Ok(())
    }
}
