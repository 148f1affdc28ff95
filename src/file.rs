// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::error::WriteError;
use crate::log::Log;

/// Filesystem operations the writer needs. `LocalFs` is the real one; tests
/// swap in stubs to force either stage to fail.
pub trait FileSystem {
    /// Create `dir` and any missing ancestors. An existing directory is fine.
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `content` in full.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let file = File::create(path)?; // truncate/overwrite
        let mut out = BufWriter::new(file);
        out.write_all(content.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Write `content` to `path`, creating missing parent directories.
/// Never fails: problems end up as error records on `log`.
pub fn write_file(path: impl AsRef<Path>, content: &str, log: &dyn Log) {
    write_file_with(&LocalFs, log, path.as_ref(), content)
}

/// [`write_file`] over an arbitrary [`FileSystem`].
///
/// The two stages are independent: a directory that cannot be created is
/// logged and the write is still attempted (the directory may already be
/// usable). A failed write is logged and the call returns.
pub fn write_file_with(fs: &dyn FileSystem, log: &dyn Log, path: &Path, content: &str) {
    if let Err(e) = ensure_parent_dir(fs, path) {
        log.error(&e.to_string());
    }
    if let Err(e) = write_content(fs, path, content) {
        log.error(&e.to_string());
    }
}

/// Stage 1. A bare file name has no parent to create.
pub fn ensure_parent_dir(fs: &dyn FileSystem, path: &Path) -> Result<(), WriteError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs
            .create_dir_all(dir)
            .map_err(|source| WriteError::CreateDir { dir: dir.to_path_buf(), source }),
        _ => Ok(()),
    }
}

/// Stage 2.
pub fn write_content(fs: &dyn FileSystem, path: &Path, content: &str) -> Result<(), WriteError> {
    fs.write(path, content)
        .map_err(|source| WriteError::Write { path: path.to_path_buf(), source })
}
