//! Error types for javacc-build
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for grammar compilation operations
pub type GrammarResult<T> = Result<T, GrammarError>;

/// Main error type for a compile run
#[derive(Error, Debug)]
pub enum GrammarError {
    /// Input path exists but cannot be walked as a source tree
    #[error("input directory {path} is unusable: {message}")]
    InvalidInputDirectory { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Task directories or suffix are inconsistent
    #[error("invalid task configuration: {0}")]
    InvalidOptions(String),

    /// Another run currently owns the temp directory
    #[error("another run holds the lock on {path}")]
    RunLocked { path: PathBuf },

    /// The compiler process could not be started at all
    #[error("could not launch {program}: {message}")]
    Launch { program: String, message: String },

    /// The compiler process ran and exited nonzero
    #[error("{program} failed with error code: [{code}] while compiling {file}")]
    CompilerExit {
        program: String,
        file: PathBuf,
        code: i32,
    },

    /// Promoting files into the final output directory failed
    #[error("failed to copy {from} to {to}: {source}")]
    Reconcile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrammarError {
    /// Exit code reported by the compiler, if this is an exit failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GrammarError::CompilerExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}
