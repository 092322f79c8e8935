//! Core library modules for paydesk.
//!
//! ## Features
//!
//! - **Time Arithmetic**: Clock conversion, shift durations, pay cycles
//! - **Record Helpers**: Typed API records, filters, aggregates
//! - **Corrections**: Edit validation and payloads, upload pre-checks
//! - **Infrastructure**: Configuration, data storage, token storage, messaging
//! - **Presentation**: Terminal tables and file export
//!
//! ## Usage
//!
//! ```rust
//! use paydesk::libs::duration::calculate_work_duration;
//!
//! let net = calculate_work_duration(Some("09:00"), Some("13:00"), Some("13:30"), Some("18:00"), Some("00:00"));
//! assert_eq!(net, "08:30");
//! ```

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod edit;
pub mod export;
pub mod filter;
pub mod messages;
pub mod pay_cycle;
pub mod records;
pub mod secret;
pub mod upload;
pub mod view;
