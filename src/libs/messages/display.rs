//! Display implementation for paydesk messages.
//!
//! All operator-facing text is produced here so wording stays consistent
//! across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration and stored token removed".to_string(),
            Message::ConfigInvalid => {
                "Configuration file is not valid JSON, fix it or run `paydesk init --delete`".to_string()
            }
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleCache => "Response cache settings".to_string(),
            Message::ConfigModuleListing => "Listing settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the back-office API URL".to_string(),
            Message::PromptAuthRetryDelay => "Delay before retrying an unauthorized read (ms)".to_string(),
            Message::PromptCacheTtl => "Cache lifetime for list responses (seconds)".to_string(),
            Message::PromptPerPage => "Rows per page".to_string(),
            Message::TokenSaved => "Access token stored".to_string(),
            Message::TokenMissing => "No access token stored, requests are sent unauthenticated".to_string(),

            // === PAY CYCLE MESSAGES ===
            Message::CycleHeader(label) => format!("Pay cycle {}", label),

            // === CALCULATION MESSAGES ===
            Message::WorkDuration(duration) => format!("Net work duration: {}", duration),
            Message::ConvertedToDecimal(clock, hours) => format!("{} = {} h", clock, hours),
            Message::ConvertedToClock(hours, clock) => format!("{} h = {}", hours, clock),
            Message::InvalidConversionInput(value) => {
                format!("'{}' is neither a decimal number of hours nor an HH:MM duration", value)
            }
            Message::InvalidDate(value) => format!("Invalid date '{}', expected 'today' or YYYY-MM-DD", value),

            // === LISTING MESSAGES ===
            Message::AttendanceHeader(label) => format!("Attendance for {}", label),
            Message::BreaksHeader(label) => format!("Breaks for {}", label),
            Message::RecordHeader(employee, date) => format!("Attendance of {} on {}", employee, date),
            Message::EditHistoryHeader => "Edit history".to_string(),
            Message::NoEditHistory => "This record has never been edited".to_string(),
            Message::NoRecordsFound => "No records found".to_string(),
            Message::PageInfo(page, pages, total) => format!("Page {} of {} ({} records)", page, pages, total),
            Message::TotalBreakTime(duration) => format!("Total break time: {}", duration),
            Message::ActiveBreaks(count) => format!("{} break(s) still in progress", count),

            // === EDIT MESSAGES ===
            Message::EditPreview => "The following changes will be sent:".to_string(),
            Message::ConfirmEdit => "Apply these changes?".to_string(),
            Message::EditCancelled => "Edit cancelled, nothing was sent".to_string(),
            Message::EditApplied(id) => format!("Attendance record {} updated", id),
            Message::BreakEditApplied(id) => format!("Break {} updated", id),
            Message::PromptEditReason => "Reason for this correction".to_string(),
            Message::ValidationFailed(error) => format!("Edit rejected: {}", error),
            Message::DeletePreview => "The following record will be removed:".to_string(),
            Message::ConfirmDelete(id) => format!("Delete {} permanently?", id),
            Message::AttendanceDeleted(id) => format!("Attendance record {} deleted", id),
            Message::BreakDeleted(id) => format!("Break {} deleted", id),

            // === UPLOAD MESSAGES ===
            Message::UploadChecked(file, rows, encoding) => {
                format!("{}: {} data row(s), decoded as {}", file, rows, encoding)
            }
            Message::UploadOpaque(file) => format!("{}: terminal export, parsed by the server", file),
            Message::ConfirmUpload(file, endpoint) => format!("Upload {} to {}?", file, endpoint),
            Message::UploadCancelled => "Upload cancelled".to_string(),
            Message::UploadAccepted(file) => format!("{} accepted by the server", file),
            Message::UploadRejected(error) => format!("Upload rejected: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ServerExportSaved(path) => format!("Server export saved to {}", path),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader(label) => format!("Statistics for {}", label),
            Message::EmployeeSummaryHeader => "Per employee".to_string(),
            Message::PenaltiesTotal(count, amount) => format!("{} penalt(ies), total {}", count, amount),

            // === RECORD MESSAGES ===
            Message::WarningsHeader(label) => format!("Warnings for {}", label),
            Message::PenaltiesHeader(label) => format!("Penalties for {}", label),
            Message::WorkLogsHeader(label) => format!("Work logs for {}", label),
            Message::FlowaceHeader(label) => format!("Flowace productivity for {}", label),
            Message::EmployeesHeader => "Employees".to_string(),
            Message::TagsHeader => "Work log tags".to_string(),
        };

        write!(f, "{}", text)
    }
}
