// tests/cli_options.rs
//
// CLI option resolution: defaults < options file < flags.
//
#![cfg(feature = "cli")]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use book_lookup::cli::{resolve_options, Args};
use book_lookup::config::AppOptions;
use clap::Parser;

fn args(config: &Path, extra: &[&str]) -> Args {
    let mut argv = vec!["cli", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(extra);
    argv.push("Agatha Christie");
    Args::parse_from(argv)
}

#[test]
fn missing_options_file_gives_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = resolve_options(&args(&tmp.path().join("absent.cfg"), &[])).unwrap();
    assert_eq!(opts, AppOptions::default());
}

#[test]
fn options_file_overrides_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("book_lookup.cfg");
    fs::write(&cfg, "base_url=http://file\ntimeout_secs=3\ntolerant=1\n").unwrap();

    let opts = resolve_options(&args(&cfg, &[])).unwrap();
    assert_eq!(opts.lookup.base_url, "http://file");
    assert_eq!(opts.lookup.timeout, Duration::from_secs(3));
    assert!(opts.lookup.tolerant);
}

#[test]
fn flags_override_options_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("book_lookup.cfg");
    fs::write(&cfg, "base_url=http://file\ntimeout_secs=3\ntolerant=1\nout_path=from_file.txt\n").unwrap();

    let opts = resolve_options(&args(&cfg, &["--timeout", "7", "-o", "from_flag.txt"])).unwrap();
    assert_eq!(opts.lookup.base_url, "http://file");
    assert_eq!(opts.lookup.timeout, Duration::from_secs(7));
    assert!(opts.lookup.tolerant);
    assert_eq!(opts.output.out_path, Some(PathBuf::from("from_flag.txt")));
}

#[test]
fn base_flag_beats_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("book_lookup.cfg");
    fs::write(&cfg, "base_url=http://file\n").unwrap();

    let opts = resolve_options(&args(&cfg, &["--base", "http://flag"])).unwrap();
    assert_eq!(opts.lookup.base_url, "http://flag");
}

#[test]
fn bare_log_file_flag_uses_default_path() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("absent.cfg");
    let parsed = Args::parse_from(["cli", "--config", cfg.to_str().unwrap(), "Agatha Christie", "--log-file"]);

    let opts = resolve_options(&parsed).unwrap();
    assert_eq!(opts.output.log_file, Some(PathBuf::from(".store/debug.log")));
}

#[test]
fn log_file_flag_takes_explicit_path() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = resolve_options(&args(&tmp.path().join("absent.cfg"), &["--log-file", "logs/run.log"])).unwrap();
    assert_eq!(opts.output.log_file, Some(PathBuf::from("logs/run.log")));
}

#[test]
fn malformed_options_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("book_lookup.cfg");
    fs::write(&cfg, "timeout_secs=soon\n").unwrap();

    assert!(resolve_options(&args(&cfg, &[])).is_err());
}
