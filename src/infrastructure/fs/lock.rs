//! Per-task run lock
//!
//! An exclusive advisory lock on `<temp dir>.lock` keeps two runs from
//! sharing one temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{GrammarError, GrammarResult};

/// Held for the duration of one run; released on drop
#[derive(Debug)]
pub struct RunLock {
    file: fs::File,
    path: PathBuf,
}

impl RunLock {
    /// Lock path guarding `temp_dir`
    pub fn path_for(temp_dir: &Path) -> PathBuf {
        let mut name = temp_dir
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        temp_dir.with_file_name(name)
    }

    /// Take the lock without waiting
    pub fn acquire(temp_dir: &Path) -> GrammarResult<Self> {
        let path = Self::path_for(temp_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|_| GrammarError::RunLocked { path: path.clone() })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
