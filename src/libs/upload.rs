//! Client-side checks for attendance and Flowace file ingestion.
//!
//! Parsing of uploaded files belongs to the backend. Before sending, the
//! client only makes sure a file is worth sending: CSV exports must decode
//! and carry the columns the backend expects, and SRP terminal exports, whose
//! format is vendor-specific, must simply not be empty.
//!
//! ## Text Encoding
//!
//! Attendance terminals and spreadsheet tools frequently emit Windows-1252
//! instead of UTF-8. CSV content that is not valid UTF-8 is decoded as
//! Windows-1252 for the header check; the original bytes are uploaded
//! untouched either way.

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Columns the backend requires in an attendance CSV.
pub const ATTENDANCE_CSV_COLUMNS: [&str; 3] = ["employee id", "date", "status"];
/// Columns the backend requires in a Flowace export.
pub const FLOWACE_CSV_COLUMNS: [&str; 3] = ["employee id", "date", "logged hours"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("file {0} is empty")]
    Empty(String),
    #[error("file {file} is missing required columns: {}", .missing.join(", "))]
    MissingColumns { file: String, missing: Vec<String> },
    #[error("file {0} has a header but no data rows")]
    NoRows(String),
    #[error("file {file} could not be read as CSV: {reason}")]
    Malformed { file: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UploadKind {
    /// Attendance-terminal SRP export.
    Srp,
    /// Attendance CSV.
    Csv,
    /// Flowace productivity CSV.
    Flowace,
}

impl UploadKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::Srp => "attendance/upload/srp",
            UploadKind::Csv => "attendance/upload/csv",
            UploadKind::Flowace => "flowace/upload",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Srp => &[],
            UploadKind::Csv => &ATTENDANCE_CSV_COLUMNS,
            UploadKind::Flowace => &FLOWACE_CSV_COLUMNS,
        }
    }
}

/// What the header check found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPreview {
    pub columns: Vec<String>,
    pub rows: usize,
    pub encoding: &'static str,
}

/// A file that passed the client-side checks and is ready to send.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub kind: UploadKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub preview: Option<UploadPreview>,
}

impl UploadFile {
    pub fn load(path: &Path, kind: UploadKind) -> Result<Self> {
        let bytes = fs::read(path)?;
        let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| "upload".to_string());
        Ok(Self::from_bytes(file_name, bytes, kind)?)
    }

    pub fn from_bytes(file_name: String, bytes: Vec<u8>, kind: UploadKind) -> Result<Self, UploadError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(UploadError::Empty(file_name));
        }

        let preview = match kind {
            UploadKind::Srp => None,
            UploadKind::Csv | UploadKind::Flowace => Some(inspect_csv(&file_name, &bytes, kind.required_columns())?),
        };

        Ok(Self {
            kind,
            file_name,
            bytes,
            preview,
        })
    }
}

/// Decodes CSV bytes to text, returning the encoding that was used.
pub fn decode_text(bytes: &[u8]) -> (String, &'static str) {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), "UTF-8"),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            (text.into_owned(), "windows-1252")
        }
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(['_', '-'], " ")
}

fn inspect_csv(file_name: &str, bytes: &[u8], required: &[&str]) -> Result<UploadPreview, UploadError> {
    let (text, encoding) = decode_text(bytes);
    let mut reader = csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(text.as_bytes());

    let malformed = |e: csv::Error| UploadError::Malformed {
        file: file_name.to_string(),
        reason: e.to_string(),
    };

    let columns: Vec<String> = reader.headers().map_err(malformed)?.iter().map(str::to_string).collect();
    let normalized: Vec<String> = columns.iter().map(|c| normalize_header(c)).collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !normalized.iter().any(|c| c.as_str() == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(UploadError::MissingColumns {
            file: file_name.to_string(),
            missing,
        });
    }

    let mut rows = 0;
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        if record.iter().any(|field| !field.is_empty()) {
            rows += 1;
        }
    }
    if rows == 0 {
        return Err(UploadError::NoRows(file_name.to_string()));
    }

    Ok(UploadPreview { columns, rows, encoding })
}
