// tests/config_file.rs
//
// Options file on disk: missing file, save → load.
//
use std::path::PathBuf;
use std::time::Duration;

use book_lookup::config::{self, AppOptions};

#[test]
fn missing_file_gives_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config::file::load(&tmp.path().join("absent.cfg")).unwrap();
    assert_eq!(cfg, AppOptions::default());
    assert_eq!(cfg.lookup.base_url, "http://buscador");
    assert_eq!(cfg.lookup.timeout, Duration::from_secs(10));
    assert!(!cfg.lookup.tolerant);
}

#[test]
fn saved_options_load_back() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("book_lookup.cfg");

    let mut cfg = AppOptions::default();
    cfg.lookup.base_url = "http://example.test/search".into();
    cfg.lookup.timeout = Duration::from_secs(2);
    cfg.lookup.tolerant = true;
    cfg.output.log_file = Some(PathBuf::from(".store/debug.log"));

    config::file::save(&path, &cfg).unwrap();
    assert_eq!(config::file::load(&path).unwrap(), cfg);
}

#[test]
fn directory_in_place_of_file_is_read_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = config::file::load(tmp.path()).unwrap_err();
    assert!(matches!(err, book_lookup::ConfigError::Read { .. }));
}
