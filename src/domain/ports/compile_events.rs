//! Compile Event Port
//!
//! Observable interface for compile runs.
//! Enables console progress, NDJSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a compile run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileEvent {
    /// Run started
    Started {
        task: String,
        input: PathBuf,
        output: PathBuf,
        temp: PathBuf,
    },

    /// Source discovery finished
    Discovered {
        compilable: usize,
        passthrough: usize,
    },

    /// A grammar file is about to be compiled
    FileCompiling {
        index: usize,
        path: PathBuf,
        args: Vec<String>,
    },

    /// A grammar file compiled successfully
    FileCompiled { index: usize, path: PathBuf },

    /// Captured compiler output
    CompilerOutput {
        path: PathBuf,
        stdout: String,
        stderr: String,
    },

    /// A compiled artifact was not promoted
    ArtifactSkipped { path: PathBuf, reason: String },

    /// Temp output and pass-through files merged into the output directory
    Reconciled { compiled: usize, passthrough: usize },

    /// Temp directory could not be removed
    CleanupFailed { path: PathBuf, error: String },

    /// Run finished successfully
    Completed {
        task: String,
        compiled: usize,
        copied: usize,
    },
}

/// Trait for receiving compile events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable progress on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait CompileEventSink {
    /// Handle a compile event
    fn on_event(&self, event: CompileEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl<T: CompileEventSink + ?Sized> CompileEventSink for Box<T> {
    fn on_event(&self, event: CompileEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
