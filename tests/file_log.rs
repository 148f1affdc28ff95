// tests/file_log.rs
//
// FileLog line format and parent creation.
//
use std::fs;

use book_lookup::{write_file_with, FileLog, FileSystem, Log};

struct NoDisk;

impl FileSystem for NoDisk {
    fn create_dir_all(&self, _dir: &std::path::Path) -> std::io::Result<()> {
        Err(std::io::Error::other("read-only"))
    }
    fn write(&self, _path: &std::path::Path, _content: &str) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn appends_error_lines_with_elapsed_prefix() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(".store").join("debug.log");
    let log = FileLog::new(&path);

    log.error("first");
    log.error("second");

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[00:00:"));
    assert!(lines[0].ends_with("][ERROR] first"));
    assert!(lines[1].ends_with("][ERROR] second"));
}

#[test]
fn writer_failures_land_in_file_log() {
    let tmp = tempfile::tempdir().unwrap();
    let log = FileLog::new(tmp.path().join("debug.log"));

    write_file_with(&NoDisk, &log, std::path::Path::new("out/books.txt"), "x");

    let text = fs::read_to_string(log.path()).unwrap();
    assert!(text.contains("[ERROR] could not create directory out"));
}
