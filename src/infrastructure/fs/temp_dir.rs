//! Temp output directory lifecycle
//!
//! Scratch tree owned by exactly one run: prepared before the first
//! compile, removed after reconciliation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Scratch directory for compiler output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempOutputDir {
    path: PathBuf,
}

impl TempOutputDir {
    /// Create the directory, discarding leftovers of an earlier crashed run
    ///
    /// Succeeds whether or not the directory already exists.
    pub fn prepare(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        match fs::remove_dir_all(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory and its contents; already gone is not an error
    pub fn cleanup(&self) -> io::Result<()> {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
