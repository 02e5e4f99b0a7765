//! Test builders for sinks and registries carrying the reference policy.

use crate::common::capture::{CaptureBackend, CaptureHandle};
use chanlog::{Registry, Severity, SeverityFilter, Sink};

/// The reference floor table from the default policy: network/optimizer at
/// warning, data at routine.
pub fn reference_floors(fallback: Severity) -> SeverityFilter {
    SeverityFilter::new(fallback)
        .floor("network", Severity::Warning)
        .floor("optimizer", Severity::Warning)
        .floor("data", Severity::Routine)
}

/// A sink over a capture backend, returning the sink and its handle.
pub fn capture_sink(filter: SeverityFilter) -> (Sink, CaptureHandle) {
    let (backend, handle) = CaptureBackend::new();
    (Sink::new(filter, Box::new(backend)), handle)
}

/// A registry shaped like the reference wiring (file policy + console
/// policy), but with capture backends so both decisions are observable.
pub fn reference_registry() -> (Registry, CaptureHandle, CaptureHandle) {
    let (file_sink, file_handle) = capture_sink(reference_floors(Severity::Debug));
    let (console_sink, console_handle) = capture_sink(reference_floors(Severity::Critical));
    let mut registry = Registry::new();
    registry.register(file_sink);
    registry.register(console_sink);
    (registry, file_handle, console_handle)
}
