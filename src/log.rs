// src/log.rs
//! Error-record sinks.
//!
//! Nothing in the crate logs through a global; callers hand a `&dyn Log` to
//! whatever may need to report a swallowed failure.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// Receives one record per swallowed failure.
pub trait Log {
    fn error(&self, msg: &str);
}

impl<L: Log + ?Sized> Log for &L {
    fn error(&self, msg: &str) {
        (**self).error(msg)
    }
}

impl<L: Log + ?Sized> Log for Box<L> {
    fn error(&self, msg: &str) {
        (**self).error(msg)
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    fn error(&self, msg: &str) {
        (**self).error(msg)
    }
}

/// Default sink: forwards to `tracing` at ERROR level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl Log for TracingLog {
    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLog;

impl Log for NullLog {
    fn error(&self, _msg: &str) {}
}

/// Keeps records in memory. Clones share the same buffer, so a caller can
/// hand one clone away and read records through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryLog {
    records: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Log for MemoryLog {
    fn error(&self, msg: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(msg.to_string());
    }
}

/// Appends `[hh:mm:ss.mmm][ERROR] msg` lines to a file.
/// Elapsed time counts from when the sink was created.
pub struct FileLog {
    path: PathBuf,
    start: Instant,
    lock: Mutex<()>,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), start: Instant::now(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, level: &str, msg: &str) {
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        let line = format!("[{elapsed}][{level}] {msg}\n");

        if let Ok(_guard) = self.lock.lock() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    let _ = fs::create_dir_all(parent);
                }
            }
            // A sink that cannot write has nowhere to report it.
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}

impl Log for FileLog {
    fn error(&self, msg: &str) {
        self.write_line("ERROR", msg);
    }
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
