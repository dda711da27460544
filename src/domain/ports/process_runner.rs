//! Process Runner Port
//!
//! Abstracts launching a grammar compiler as an external JVM process.
//! The orchestrator blocks until the process exits.

use std::path::PathBuf;

/// One blocking compiler launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaInvocation {
    /// Archives placed on the JVM classpath
    pub classpath: Vec<PathBuf>,
    /// Entry point (main class)
    pub main_class: String,
    /// Exported program arguments
    pub args: Vec<String>,
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            ..Self::default()
        }
    }

    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// The process could not be launched
#[derive(Debug)]
pub enum ProcessError {
    /// Java executable not found
    ExecutableNotFound(String),
    /// A classpath entry does not exist
    MissingClasspathEntry(PathBuf),
    /// Classpath is empty
    EmptyClasspath,
    /// Other spawn failure
    Io(std::io::Error),
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExecutableNotFound(exe) => write!(f, "executable '{}' not found", exe),
            Self::MissingClasspathEntry(path) => {
                write!(f, "classpath entry {} does not exist", path.display())
            }
            Self::EmptyClasspath => write!(f, "no classpath configured"),
            Self::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ProcessError {}

impl From<std::io::Error> for ProcessError {
    fn from(err: std::io::Error) -> Self {
        ProcessError::Io(err)
    }
}

/// Runs a compiler to completion
///
/// Implementations:
/// - `JavaProcessRunner` - spawns `java -cp ... <main> args...`
/// - test fakes that record invocations and return chosen exit codes
pub trait ProcessRunner {
    fn run(&self, invocation: &JavaInvocation) -> Result<ProcessOutput, ProcessError>;
}
