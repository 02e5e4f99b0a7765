//! Console backend: the process's standard diagnostic stream.

use chanlog_core::Backend;
use std::io::{self, Write};

/// Writes each line to stderr (not stdout — log output must never mix with
/// the process's data output). The stream is a shared external resource: the
/// backend never closes it and holds no handle between writes.
#[derive(Debug, Default)]
pub struct StderrBackend;

impl StderrBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for StderrBackend {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(line.as_bytes())?;
        stderr.write_all(b"\n")
    }
}
