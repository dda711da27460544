//! Source Tree Value Objects
//!
//! A read-only view of one input directory, split into compilable grammar
//! files and pass-through files, plus the per-file compilation unit that
//! mirrors an input's relative path into the temp and final output trees.

use std::path::{Path, PathBuf};

/// Classification of a file found under the source root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Matches the family suffix, handed to the compiler
    Compilable,
    /// Anything else, copied unchanged
    PassThrough,
}

impl FileKind {
    /// Classify a path by exact, case-sensitive suffix match on its file name
    ///
    /// Compares raw bytes, so names that are not valid UTF-8 still match.
    pub fn classify(relative: &Path, suffix: &str) -> Self {
        let matches = relative
            .file_name()
            .map(|n| !suffix.is_empty() && n.as_encoded_bytes().ends_with(suffix.as_bytes()))
            .unwrap_or(false);

        if matches {
            FileKind::Compilable
        } else {
            FileKind::PassThrough
        }
    }
}

/// A regular file below the source root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub relative: PathBuf,
    pub kind: FileKind,
}

/// Immutable view over a source root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    root: PathBuf,
    files: Vec<SourceFile>,
}

impl SourceTree {
    /// Build a tree from relative paths; classification is derived from `suffix`
    ///
    /// Paths are sorted so iteration order does not depend on the file system.
    pub fn new(root: impl Into<PathBuf>, relatives: Vec<PathBuf>, suffix: &str) -> Self {
        let mut files: Vec<SourceFile> = relatives
            .into_iter()
            .map(|relative| {
                let kind = FileKind::classify(&relative, suffix);
                SourceFile { relative, kind }
            })
            .collect();
        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        files.dedup_by(|a, b| a.relative == b.relative);

        Self {
            root: root.into(),
            files,
        }
    }

    /// An empty tree (missing input directory)
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn compilable(&self) -> impl Iterator<Item = &SourceFile> {
        self.files
            .iter()
            .filter(|f| f.kind == FileKind::Compilable)
    }

    pub fn passthrough(&self) -> impl Iterator<Item = &SourceFile> {
        self.files
            .iter()
            .filter(|f| f.kind == FileKind::PassThrough)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Absolute location of a file of this tree
    pub fn absolute(&self, file: &SourceFile) -> PathBuf {
        self.root.join(&file.relative)
    }
}

/// One grammar file slated for compilation
///
/// `temp_output` and `final_output` share the input's relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub input: PathBuf,
    pub relative: PathBuf,
    pub temp_output: PathBuf,
    pub final_output: PathBuf,
}

impl CompilationUnit {
    pub fn new(tree: &SourceTree, file: &SourceFile, temp_dir: &Path, output_dir: &Path) -> Self {
        Self {
            input: tree.absolute(file),
            relative: file.relative.clone(),
            temp_output: temp_dir.join(&file.relative),
            final_output: output_dir.join(&file.relative),
        }
    }

    /// Directory inside the temp tree the compiler writes this unit's artifacts to
    pub fn temp_parent(&self) -> PathBuf {
        self.temp_output
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.temp_output.clone())
    }

    /// File name without the grammar suffix
    pub fn stem(&self) -> String {
        self.relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
