// src/config/file.rs
//! Plain `key=value` options file.
//!
//! ```text
//! # book_lookup.cfg
//! base_url=http://buscador
//! timeout_secs=10
//! tolerant=0
//! out_path=out/books.txt
//! log_file=.store/debug.log
//! ```
//!
//! Blank lines, `#` comments and unknown keys are skipped. Empty `out_path`
//! or `log_file` means "not set".

use std::{fs, io, path::{Path, PathBuf}, time::Duration};

use super::options::AppOptions;
use crate::error::ConfigError;

/// Read options from `path`. A missing file yields defaults.
pub fn load(path: &Path) -> Result<AppOptions, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppOptions::default()),
        Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
    }
}

pub fn parse(text: &str) -> Result<AppOptions, ConfigError> {
    let mut cfg = AppOptions::default();

    for (ix, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let (key, val) = (key.trim(), val.trim());

        let bad = || ConfigError::Value { line: ix + 1, key: key.to_string(), value: val.to_string() };

        match key {
            "base_url" => {
                if val.is_empty() { return Err(bad()); }
                cfg.lookup.base_url = val.to_string();
            }
            "timeout_secs" => {
                let secs: u64 = val.parse().map_err(|_| bad())?;
                cfg.lookup.timeout = Duration::from_secs(secs);
            }
            "tolerant" => cfg.lookup.tolerant = parse_flag(val).ok_or_else(bad)?,
            "out_path" => cfg.output.out_path = non_empty_path(val),
            "log_file" => cfg.output.log_file = non_empty_path(val),
            _ => {}
        }
    }
    Ok(cfg)
}

pub fn save(path: &Path, cfg: &AppOptions) -> Result<(), ConfigError> {
    fs::write(path, render(cfg))
        .map_err(|source| ConfigError::Save { path: path.to_path_buf(), source })
}

pub fn render(cfg: &AppOptions) -> String {
    let mut s = String::new();
    s.push_str(&format!("base_url={}\n", cfg.lookup.base_url));
    s.push_str(&format!("timeout_secs={}\n", cfg.lookup.timeout.as_secs()));
    s.push_str(&format!("tolerant={}\n", if cfg.lookup.tolerant {1} else {0}));
    if let Some(p) = &cfg.output.out_path {
        s.push_str(&format!("out_path={}\n", p.display()));
    }
    if let Some(p) = &cfg.output.log_file {
        s.push_str(&format!("log_file={}\n", p.display()));
    }
    s
}

fn parse_flag(val: &str) -> Option<bool> {
    if val == "1" || val.eq_ignore_ascii_case("true") { Some(true) }
    else if val == "0" || val.eq_ignore_ascii_case("false") { Some(false) }
    else { None }
}

fn non_empty_path(val: &str) -> Option<PathBuf> {
    if val.is_empty() { None } else { Some(PathBuf::from(val)) }
}
