//! # Paydesk - attendance and payroll back-office client
//!
//! A command-line utility for HR operators: resolve pay cycles, compute
//! attendance durations, review and correct attendance and break records, and
//! export cycle reports from the back-office API.
//!
//! ## Features
//!
//! - **Pay Cycles**: The 6th-to-5th payroll window, by offset or containing date
//! - **Durations**: Net work time from check-in, break and check-out clocks
//! - **Review**: Attendance, breaks, warnings, penalties, work logs, Flowace data
//! - **Corrections**: Validated edits with a mandatory reason and audit trail
//! - **Ingestion**: Pre-checked SRP, attendance CSV and Flowace uploads
//! - **Export**: CSV, JSON and Excel cycle reports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paydesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
