//! Core types for the datebook ecosystem.
//!
//! This crate provides everything behind the datebook CLI:
//! - `Date` and `Database` for the ordered date-to-events store
//! - `command` for the line grammar the loop accepts
//! - `repl` for the command loop itself, generic over reader/writer

pub mod command;
pub mod database;
pub mod date;
pub mod error;
pub mod repl;

// Re-export the main types at crate root for convenience
pub use command::Command;
pub use database::Database;
pub use date::Date;
pub use error::{CommandError, DateError};
