//! Java Process Runner
//!
//! Launches `java -cp <classpath> <main class> <args...>` and waits for it.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{JavaInvocation, ProcessError, ProcessOutput, ProcessRunner};

/// Default Java launcher
pub const DEFAULT_JAVA: &str = "java";

/// Runs compilers in a child JVM
#[derive(Debug, Clone)]
pub struct JavaProcessRunner {
    java: PathBuf,
}

impl Default for JavaProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_JAVA)
    }
}

impl JavaProcessRunner {
    pub fn new(java: impl Into<PathBuf>) -> Self {
        Self { java: java.into() }
    }

    pub fn java(&self) -> &PathBuf {
        &self.java
    }

    /// Join classpath entries with the platform separator
    fn classpath_arg(invocation: &JavaInvocation) -> Result<OsString, ProcessError> {
        if invocation.classpath.is_empty() {
            return Err(ProcessError::EmptyClasspath);
        }
        if let Some(missing) = invocation.classpath.iter().find(|p| !p.exists()) {
            return Err(ProcessError::MissingClasspathEntry(missing.clone()));
        }
        std::env::join_paths(&invocation.classpath)
            .map_err(|e| ProcessError::Io(io::Error::new(io::ErrorKind::InvalidInput, e)))
    }

    fn command(&self, invocation: &JavaInvocation) -> Result<Command, ProcessError> {
        let classpath = Self::classpath_arg(invocation)?;

        let mut cmd = Command::new(&self.java);
        cmd.arg("-cp")
            .arg(classpath)
            .arg(&invocation.main_class)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        Ok(cmd)
    }
}

impl ProcessRunner for JavaProcessRunner {
    fn run(&self, invocation: &JavaInvocation) -> Result<ProcessOutput, ProcessError> {
        let output = self
            .command(invocation)?
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    ProcessError::ExecutableNotFound(self.java.display().to_string())
                }
                _ => ProcessError::Io(e),
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
