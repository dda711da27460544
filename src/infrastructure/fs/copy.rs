//! Atomic file copy
//!
//! Copies through a temp file in the destination directory and renames it
//! into place, so readers never see a half-written file.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

/// Copy `from` to `to`, creating parent directories and replacing any existing file
pub fn atomic_copy(from: &Path, to: &Path) -> io::Result<u64> {
    let parent = match to.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut source = fs::File::open(from)?;
    let mut staged = NamedTempFile::new_in(parent)?;
    let written = io::copy(&mut source, staged.as_file_mut())?;
    staged.as_file().sync_all()?;

    if let Ok(metadata) = source.metadata() {
        let _ = fs::set_permissions(staged.path(), metadata.permissions());
    }

    staged.persist(to).map_err(|e| e.error)?;
    Ok(written)
}
