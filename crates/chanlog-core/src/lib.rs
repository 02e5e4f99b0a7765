//! chanlog-core — channel/severity model, filter policy, and sink registry.
//!
//! This crate holds everything about a log record *except* where its bytes
//! physically land. Physical destinations implement the [`Backend`] trait and
//! live in `chanlog-backends`.
//!
//! # Architecture
//!
//! ```text
//! log(channel, severity, message)
//!        │
//!        ▼
//!    Registry ──► Sink ──► filter ▸ format ▸ Backend   (per sink, in order)
//! ```
//!
//! Each registered [`Sink`] makes its own accept/reject decision via its
//! [`SeverityFilter`]; the registry never filters. A rejected record produces
//! zero side effects on that sink, including zero backend calls.

pub mod config;
pub mod filter;
pub mod registry;
pub mod sink;
pub mod types;

pub use config::{ConsoleSinkConfig, FileSinkConfig, PolicyConfig};
pub use filter::SeverityFilter;
pub use registry::Registry;
pub use sink::{render_line, Backend, Sink};
pub use types::{label_for_index, Record, Severity};
