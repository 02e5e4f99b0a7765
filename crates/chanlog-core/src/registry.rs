//! Registry — the explicit fan-out point over an ordered set of sinks.
//!
//! There is no process-global instance: callers construct a registry during
//! startup, wrap it in `Arc`, and hand clones to every subsystem that logs.
//! Sinks are appended during wiring and never removed; `log` only needs
//! `&self`, so the registry is freely shared across threads.

use crate::sink::Sink;
use crate::types::{Record, Severity};

#[derive(Default)]
pub struct Registry {
    sinks: Vec<Sink>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sink. Registration order is fan-out order. No duplicate
    /// detection: wrapping one physical destination in two sinks with
    /// different filters is legal.
    pub fn register(&mut self, sink: Sink) {
        self.sinks.push(sink);
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// The sole logging entry point: build a record and offer it to every
    /// sink in registration order. Performs no filtering itself — each sink
    /// decides independently, so two sinks may disagree about the same
    /// record. Never fails and never panics; an empty registry is a no-op.
    pub fn log(&self, channel: &str, severity: Severity, message: &str) {
        let record = Record {
            channel,
            severity,
            message,
        };
        for sink in &self.sinks {
            sink.emit(&record);
        }
    }
}
