//! In-memory backends for observing sink behaviour without touching disk.

use chanlog::Backend;
use std::io;
use std::sync::{Arc, Mutex};

/// Backend that records every line it receives. The [`CaptureHandle`] stays
/// with the test while the backend itself is boxed into a sink.
pub struct CaptureBackend {
    lines: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
pub struct CaptureHandle {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureBackend {
    pub fn new() -> (Self, CaptureHandle) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: Arc::clone(&lines),
            },
            CaptureHandle { lines },
        )
    }
}

impl Backend for CaptureBackend {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

impl CaptureHandle {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Backend whose every write fails, for exercising the swallow-and-count
/// error path.
pub struct FailingBackend;

impl Backend for FailingBackend {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "simulated I/O failure"))
    }
}
