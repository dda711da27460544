//! Compile result types

use std::path::PathBuf;

/// What a successful run did; all paths are relative
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutcome {
    /// Grammar files handed to the compiler
    pub compiled: Vec<PathBuf>,
    /// Compiler artifacts promoted from the temp tree
    pub promoted: Vec<PathBuf>,
    /// Non-grammar files copied from the input tree
    pub passthrough: Vec<PathBuf>,
    /// Artifacts withheld because a hand-written source replaces them
    pub skipped: Vec<PathBuf>,
}

impl CompileOutcome {
    /// Number of files written to the output directory
    pub fn written(&self) -> usize {
        self.promoted.len() + self.passthrough.len()
    }

    pub fn is_noop(&self) -> bool {
        self.compiled.is_empty() && self.written() == 0
    }
}
