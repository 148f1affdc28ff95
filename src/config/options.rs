// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub lookup: LookupOptions,
    pub output: OutputOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    /// Search endpoint the query string is appended to.
    pub base_url: String,
    pub timeout: Duration,
    /// Log and swallow HTTP failures instead of returning them.
    pub tolerant: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            tolerant: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OutputOptions {
    /// Where the body goes; `None` prints it.
    pub out_path: Option<PathBuf>,
    /// File sink for error records; `None` uses tracing.
    pub log_file: Option<PathBuf>,
}
