//! Sink — one filter, one line formatter, one backend.
//!
//! All observable effects of a log call happen past the filter check: a
//! rejected record causes no formatting and no backend invocation at all.
//! The format+write section runs under a per-sink mutex so that records
//! emitted concurrently never interleave their bytes in one backend.

use crate::filter::SeverityFilter;
use crate::types::Record;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Physical destination for formatted log lines.
///
/// Implementations append exactly `line` plus a trailing newline per call.
/// The caller (the owning [`Sink`]) serializes calls, so implementations may
/// keep unguarded internal state such as rotation counters.
pub trait Backend: Send {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Render a record into the stable line shape `#<channel> <severity> <message>`.
///
/// This exact shape is the compatibility contract of the output files; do not
/// reorder or re-delimit it.
pub fn render_line(record: &Record<'_>) -> String {
    format!(
        "#{} <{}> {}",
        record.channel, record.severity, record.message
    )
}

/// A filter/formatter/backend triple registered with a [`Registry`](crate::Registry).
///
/// Constructed once during wiring and kept for the life of the registry.
/// Backend write errors never reach the log caller: the line is dropped,
/// [`dropped_writes`](Self::dropped_writes) increments, and a `tracing`
/// warning fires.
pub struct Sink {
    filter: SeverityFilter,
    backend: Mutex<Box<dyn Backend>>,
    dropped: AtomicU64,
}

impl Sink {
    pub fn new(filter: SeverityFilter, backend: Box<dyn Backend>) -> Self {
        Self {
            filter,
            backend: Mutex::new(backend),
            dropped: AtomicU64::new(0),
        }
    }

    /// Evaluate the filter and, on accept, format and forward to the backend.
    pub fn emit(&self, record: &Record<'_>) {
        if !self.filter.accepts(record) {
            return;
        }
        // A poisoned lock only means another writer panicked mid-write;
        // logging must keep working, so take the lock anyway.
        let mut backend = self
            .backend
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let line = render_line(record);
        if let Err(err) = backend.write_line(&line) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %err, channel = record.channel, "log line dropped by backend");
        }
    }

    pub fn filter(&self) -> &SeverityFilter {
        &self.filter
    }

    /// Lines accepted by the filter but lost to a backend write error.
    pub fn dropped_writes(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
