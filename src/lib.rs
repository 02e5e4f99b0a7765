//! chanlog — channel-routed, severity-filtered logging.
//!
//! Callers tag every record with a channel (logical subsystem) and a
//! severity; each registered sink decides independently whether to emit it,
//! combining a per-channel minimum-severity table with a blanket fallback
//! threshold by logical OR. See [`SeverityFilter`] for why that OR matters:
//! the reference console sink has a `critical` fallback yet still emits
//! sub-critical records on channels whose floor admits them.
//!
//! The registry is an explicit value, not a global: build it once at process
//! start, wrap it in `Arc`, and hand clones to everything that logs.
//!
//! ```no_run
//! use std::sync::Arc;
//! use chanlog::{bootstrap, PolicyConfig, Severity};
//!
//! let registry = Arc::new(bootstrap(&PolicyConfig::defaults()));
//! registry.log("data", Severity::Routine, "loaded 10 structures");
//! ```

pub use chanlog_backends::{FileBackendError, RotatingFileBackend, StderrBackend};
pub use chanlog_core::{
    label_for_index, render_line, Backend, ConsoleSinkConfig, FileSinkConfig, PolicyConfig,
    Record, Registry, Severity, SeverityFilter, Sink,
};

/// Build the reference two-sink registry described by `config`:
///
/// - a rotating file sink sharing the `[channels]` floor table, with the
///   `[file]` fallback (`debug` by default, so it captures everything);
/// - a stderr sink sharing the same floor table, with the `[console]`
///   fallback (`critical` by default).
///
/// A sink whose backend cannot be constructed (an unwritable log directory,
/// say) is skipped with a `tracing` warning; the returned registry always
/// works, possibly with fewer sinks than configured. Logging must never
/// prevent the host process from starting.
pub fn bootstrap(config: &PolicyConfig) -> Registry {
    let mut registry = Registry::new();

    match RotatingFileBackend::new(
        &config.file.directory,
        config.file.base_name.clone(),
        config.file.rotation_bytes,
    ) {
        Ok(backend) => {
            let filter = SeverityFilter::from_table(&config.channels, config.file.fallback);
            registry.register(Sink::new(filter, Box::new(backend)));
        }
        Err(err) => {
            tracing::warn!(error = %err, "file sink disabled, continuing without it");
        }
    }

    let filter = SeverityFilter::from_table(&config.channels, config.console.fallback);
    registry.register(Sink::new(filter, Box::new(StderrBackend::new())));

    registry
}
