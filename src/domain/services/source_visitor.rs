//! Source File Visitor
//!
//! Walks an input directory and splits its regular files into compilable
//! and pass-through sets. Nothing is excluded: hidden files and
//! `.gitignore`d files are visited like any other.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::value_objects::SourceTree;
use crate::error::{GrammarError, GrammarResult};

/// Discover every regular file under `root`
///
/// A missing root yields an empty tree. A root that exists but is not a
/// directory, or cannot be walked, is a configuration error.
pub fn visit(root: &Path, suffix: &str) -> GrammarResult<SourceTree> {
    if !root.exists() {
        return Ok(SourceTree::empty(root));
    }
    if !root.is_dir() {
        return Err(GrammarError::InvalidInputDirectory {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build();

    let mut relatives: Vec<PathBuf> = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| GrammarError::InvalidInputDirectory {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            relatives.push(relative.to_path_buf());
        }
    }

    Ok(SourceTree::new(root, relatives, suffix))
}

/// Every regular file under `root`, relative to it
///
/// Used to enumerate compiler output in the temp tree.
pub fn list_files(root: &Path) -> GrammarResult<Vec<PathBuf>> {
    Ok(visit(root, "")?
        .files()
        .iter()
        .map(|f| f.relative.clone())
        .collect())
}
