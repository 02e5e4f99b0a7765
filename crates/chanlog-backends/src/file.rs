//! Rotating file backend: size-capped, sequentially numbered log files.
//!
//! Files are named `<base>_<NNNNN>.log` with a 5-digit zero-padded rotation
//! index. Once the bytes written to the current file reach the rotation
//! threshold, the next record opens the next index. Rotation happens before
//! a write, never mid-line, so every record lands in exactly one file.

use chanlog_core::Backend;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Construction failure for [`RotatingFileBackend`]. Per policy these are
/// fatal to the affected sink only; the caller drops the sink and keeps the
/// rest of the registry running.
#[derive(Debug, Error)]
pub enum FileBackendError {
    #[error("log directory {path:?} is not usable")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open log file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct RotatingFileBackend {
    dir: PathBuf,
    base: String,
    rotation_bytes: u64,
    index: u32,
    written: u64,
    file: File,
}

impl RotatingFileBackend {
    /// Open the first unused index under `dir`. Files left by a previous run
    /// are skipped, never truncated or appended to.
    pub fn new(
        dir: impl Into<PathBuf>,
        base: impl Into<String>,
        rotation_bytes: u64,
    ) -> Result<Self, FileBackendError> {
        let dir = dir.into();
        let base = base.into();

        std::fs::create_dir_all(&dir).map_err(|source| FileBackendError::Directory {
            path: dir.clone(),
            source,
        })?;

        let index = next_free_index(&dir, &base, 0);
        let path = file_path(&dir, &base, index);
        let file = open_log_file(&path).map_err(|source| FileBackendError::Open {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            dir,
            base,
            rotation_bytes,
            index,
            written: 0,
            file,
        })
    }

    /// Path of the file the next accepted record will be written to.
    pub fn current_path(&self) -> PathBuf {
        file_path(&self.dir, &self.base, self.index)
    }

    fn rotate(&mut self) -> io::Result<()> {
        // Dropping self.file on reassignment closes the old file.
        let index = next_free_index(&self.dir, &self.base, self.index + 1);
        self.file = open_log_file(&file_path(&self.dir, &self.base, index))?;
        self.index = index;
        self.written = 0;
        Ok(())
    }
}

impl Backend for RotatingFileBackend {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        // Rotate up front: the record that crossed the threshold stayed in
        // the old file; this one starts the new file.
        if self.written >= self.rotation_bytes {
            self.rotate()?;
        }
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.written += line.len() as u64 + 1;
        Ok(())
    }
}

fn file_path(dir: &Path, base: &str, index: u32) -> PathBuf {
    dir.join(format!("{base}_{index:05}.log"))
}

fn next_free_index(dir: &Path, base: &str, mut index: u32) -> u32 {
    while file_path(dir, base, index).exists() {
        index += 1;
    }
    index
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create_new(true).write(true).open(path)
}
