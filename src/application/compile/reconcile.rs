//! Reconciliation
//!
//! Merges compiler output from the temp tree and pass-through files from the
//! input tree into the final output directory. Compiled artifacts are
//! promoted first and are never overwritten by a pass-through copy.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::{CompileEvent, CompileEventSink};
use crate::domain::services::list_files;
use crate::domain::value_objects::SourceTree;
use crate::error::{GrammarError, GrammarResult};
use crate::infrastructure::fs::atomic_copy;

/// Artifacts promoted and withheld by [`promote_compiled`]
#[derive(Debug, Default)]
pub struct Promotion {
    pub promoted: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

fn copy(from: &Path, to: &Path) -> GrammarResult<()> {
    atomic_copy(from, to)
        .map(|_| ())
        .map_err(|source| GrammarError::Reconcile {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}

/// Hand-written roots that can shadow generated classes
///
/// Roots inside the output directory are generated themselves and ignored.
fn effective_custom_roots<'a>(custom_roots: &'a [PathBuf], output_dir: &Path) -> Vec<&'a Path> {
    custom_roots
        .iter()
        .map(PathBuf::as_path)
        .filter(|root| !root.starts_with(output_dir))
        .collect()
}

fn shadowing_source(relative: &Path, roots: &[&Path]) -> Option<PathBuf> {
    let is_java = relative.extension().map(|e| e == "java").unwrap_or(false);
    if !is_java {
        return None;
    }
    roots
        .iter()
        .map(|root| root.join(relative))
        .find(|candidate| candidate.is_file())
}

/// Copy every file of the temp tree into `output_dir`
pub fn promote_compiled(
    temp_dir: &Path,
    output_dir: &Path,
    custom_roots: &[PathBuf],
    events: &dyn CompileEventSink,
) -> GrammarResult<Promotion> {
    let artifacts = list_files(temp_dir).map_err(|e| GrammarError::Reconcile {
        from: temp_dir.to_path_buf(),
        to: output_dir.to_path_buf(),
        source: io::Error::other(e.to_string()),
    })?;
    let roots = effective_custom_roots(custom_roots, output_dir);

    let mut promotion = Promotion::default();
    for relative in artifacts {
        if let Some(custom) = shadowing_source(&relative, &roots) {
            events.on_event(CompileEvent::ArtifactSkipped {
                path: relative.clone(),
                reason: format!("custom source {}", custom.display()),
            });
            promotion.skipped.push(relative);
            continue;
        }

        copy(&temp_dir.join(&relative), &output_dir.join(&relative))?;
        promotion.promoted.push(relative);
    }

    Ok(promotion)
}

/// Copy the tree's pass-through files into `output_dir`
///
/// Paths in `promoted` were written by the compiler during this run and
/// are left untouched.
pub fn copy_passthrough(
    tree: &SourceTree,
    output_dir: &Path,
    promoted: &HashSet<PathBuf>,
) -> GrammarResult<Vec<PathBuf>> {
    let mut copied = Vec::new();
    for file in tree.passthrough() {
        if promoted.contains(&file.relative) {
            continue;
        }
        copy(&tree.absolute(file), &output_dir.join(&file.relative))?;
        copied.push(file.relative.clone());
    }
    Ok(copied)
}
