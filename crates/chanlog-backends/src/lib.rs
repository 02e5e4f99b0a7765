//! chanlog-backends — physical destinations for chanlog sinks.
//!
//! Each backend implements [`chanlog_core::Backend`]: accept one formatted
//! line, append it plus a newline, report `io::Error` on failure. Filtering,
//! formatting, and write serialization all happen upstream in the owning
//! sink; backends only move bytes.

pub mod console;
pub mod file;

pub use console::StderrBackend;
pub use file::{FileBackendError, RotatingFileBackend};
