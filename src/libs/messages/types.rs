//! Message type definitions.
//!
//! Every user-facing string is a variant of [`Message`]. Variants carry the
//! dynamic parts as parameters; the text itself lives in `display.rs`.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigInvalid,
    ConfigModuleServer,
    ConfigModuleCache,
    ConfigModuleListing,
    PromptSelectModules,
    PromptServerApiUrl,
    PromptAuthRetryDelay,
    PromptCacheTtl,
    PromptPerPage,
    TokenSaved,
    TokenMissing,

    // === PAY CYCLE MESSAGES ===
    CycleHeader(String), // period label

    // === CALCULATION MESSAGES ===
    WorkDuration(String),
    ConvertedToDecimal(String, String), // clock, decimal hours
    ConvertedToClock(String, String),   // decimal hours, clock
    InvalidConversionInput(String),
    InvalidDate(String),

    // === LISTING MESSAGES ===
    AttendanceHeader(String),
    BreaksHeader(String),
    RecordHeader(String, String), // employee, date
    EditHistoryHeader,
    NoEditHistory,
    NoRecordsFound,
    PageInfo(usize, usize, usize), // page, total pages, total items
    TotalBreakTime(String),
    ActiveBreaks(usize),

    // === EDIT MESSAGES ===
    EditPreview,
    ConfirmEdit,
    EditCancelled,
    EditApplied(String),      // record id
    BreakEditApplied(String), // break id
    PromptEditReason,
    ValidationFailed(String),
    DeletePreview,
    ConfirmDelete(String),     // record id
    AttendanceDeleted(String), // record id
    BreakDeleted(String),      // break id

    // === UPLOAD MESSAGES ===
    UploadChecked(String, usize, String), // file, rows, encoding
    UploadOpaque(String),
    ConfirmUpload(String, String), // file, endpoint
    UploadCancelled,
    UploadAccepted(String),
    UploadRejected(String),

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),
    ServerExportSaved(String),

    // === STATISTICS MESSAGES ===
    StatsHeader(String),
    EmployeeSummaryHeader,
    PenaltiesTotal(usize, String), // count, amount

    // === RECORD MESSAGES ===
    WarningsHeader(String),
    PenaltiesHeader(String),
    WorkLogsHeader(String),
    FlowaceHeader(String),
    EmployeesHeader,
    TagsHeader,
}
