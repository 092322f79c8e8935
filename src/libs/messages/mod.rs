//! Centralized operator-facing messages.
//!
//! - `types.rs`: the [`Message`] enum
//! - `display.rs`: its text
//! - `macros.rs`: `msg_*!` output macros

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
