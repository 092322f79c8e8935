//! Typed access to the individual back-office resources.

use super::cache::Query;
use super::{ApiClient, ApiError};
use crate::libs::pay_cycle::PayCycle;
use crate::libs::records::{
    AttendanceRecord, AttendanceStatus, BreakSession, Employee, FlowaceRecord, Penalty, Tag, Warning, WorkLog,
};
use crate::libs::upload::UploadFile;
use chrono::NaiveDate;
use reqwest::multipart;
use serde_json::Value;

pub const ATTENDANCE_URL: &str = "attendance";
pub const BREAKS_URL: &str = "breaks";
pub const EMPLOYEES_URL: &str = "employees";
pub const WARNINGS_URL: &str = "warnings";
pub const PENALTIES_URL: &str = "penalties";
pub const WORK_LOGS_URL: &str = "work-logs";
pub const TAGS_URL: &str = "tags";
pub const FLOWACE_URL: &str = "flowace";
pub const ADMIN_EXPORT_URL: &str = "admin/export";

/// Server-side filters shared by the list endpoints.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub employee_id: Option<String>,
    pub status: Option<AttendanceStatus>,
}

impl RecordQuery {
    pub fn for_cycle(cycle: &PayCycle) -> Self {
        Self {
            start: Some(cycle.start),
            end: Some(cycle.end),
            ..Default::default()
        }
    }

    pub fn employee(mut self, employee_id: Option<String>) -> Self {
        self.employee_id = employee_id;
        self
    }

    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(start) = self.start {
            query.insert("startDate".to_string(), start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = self.end {
            query.insert("endDate".to_string(), end.format("%Y-%m-%d").to_string());
        }
        if let Some(id) = &self.employee_id {
            query.insert("employeeId".to_string(), id.clone());
        }
        if let Some(status) = self.status {
            query.insert("status".to_string(), status.as_wire().to_string());
        }
        query
    }
}

/// Resources available through the dedicated server-side export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AdminExport {
    Breaks,
    Penalties,
}

impl AdminExport {
    pub fn path(&self) -> String {
        match self {
            AdminExport::Breaks => format!("{}/breaks", ADMIN_EXPORT_URL),
            AdminExport::Penalties => format!("{}/penalties", ADMIN_EXPORT_URL),
        }
    }
}

impl ApiClient {
    pub async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.list(EMPLOYEES_URL, &Query::new()).await
    }

    pub async fn attendance(&self, query: &RecordQuery) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.list(ATTENDANCE_URL, &query.to_query()).await
    }

    pub async fn attendance_record(&self, id: &str) -> Result<AttendanceRecord, ApiError> {
        self.get(&format!("{}/{}", ATTENDANCE_URL, id)).await
    }

    pub async fn update_attendance(&self, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.patch(&format!("{}/{}", ATTENDANCE_URL, id), body).await
    }

    pub async fn delete_attendance(&self, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.delete(&format!("{}/{}", ATTENDANCE_URL, id), body).await
    }

    pub async fn breaks(&self, query: &RecordQuery) -> Result<Vec<BreakSession>, ApiError> {
        self.list(BREAKS_URL, &query.to_query()).await
    }

    pub async fn break_session(&self, id: &str) -> Result<BreakSession, ApiError> {
        self.get(&format!("{}/{}", BREAKS_URL, id)).await
    }

    pub async fn update_break(&self, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.put(&format!("{}/{}", BREAKS_URL, id), body).await
    }

    pub async fn delete_break(&self, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.delete(&format!("{}/{}", BREAKS_URL, id), body).await
    }

    pub async fn warnings(&self, query: &RecordQuery) -> Result<Vec<Warning>, ApiError> {
        self.list(WARNINGS_URL, &query.to_query()).await
    }

    pub async fn penalties(&self, query: &RecordQuery) -> Result<Vec<Penalty>, ApiError> {
        self.list(PENALTIES_URL, &query.to_query()).await
    }

    pub async fn work_logs(&self, query: &RecordQuery) -> Result<Vec<WorkLog>, ApiError> {
        self.list(WORK_LOGS_URL, &query.to_query()).await
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.list(TAGS_URL, &Query::new()).await
    }

    pub async fn flowace(&self, query: &RecordQuery) -> Result<Vec<FlowaceRecord>, ApiError> {
        self.list(FLOWACE_URL, &query.to_query()).await
    }

    /// Sends a validated file to its ingestion endpoint.
    pub async fn upload_file(&self, file: &UploadFile) -> Result<Value, ApiError> {
        let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = multipart::Form::new().part("file", part);
        self.upload(file.kind.endpoint(), form).await
    }

    /// Downloads a server-generated export for the given window.
    pub async fn admin_export(&self, export: AdminExport, query: &RecordQuery) -> Result<Vec<u8>, ApiError> {
        self.download(&export.path(), &query.to_query()).await
    }
}
