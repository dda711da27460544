//! Test environment builder for isolated javacc-build testing.
//!
//! Provides `TestEnv` - an isolated project directory, a private home so no
//! user config leaks in, and helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared for every run
const CLI_ENV_VARS: &[&str] = &[
    "JAVACC_JAVA",
    "JAVACC_CLASSPATH",
    "JAVACC_BUILD_DIR",
    "JAVACC_VERBOSITY",
];

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME and the user config dir
    pub home_dir: TempDir,
    /// Path to the javacc-build binary
    bin: PathBuf,
    /// Variables applied to every run
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_javacc-build")),
            env: Vec::new(),
        }
    }

    /// Environment with the scripted `java` and an existing classpath entry
    #[cfg(unix)]
    pub fn with_fake_java() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let mut env = Self::new();
        let java = env.home_path("bin/java");
        let jar = env.home_path("lib/javacc.jar");
        env.write_file(&java, super::fixtures::FAKE_JAVA);
        env.write_file(&jar, "");
        std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make java executable");

        env.set_env("JAVACC_JAVA", &java.display().to_string());
        env.set_env("JAVACC_CLASSPATH", &jar.display().to_string());
        let log = env.log_path();
        env.set_env("FAKE_JAVA_LOG", &log.display().to_string());
        env
    }

    /// Add a variable for every following run
    pub fn set_env(&mut self, key: &str, value: &str) {
        self.env.push((key.to_string(), value.to_string()));
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// File the scripted `java` appends its invocations to
    pub fn log_path(&self) -> PathBuf {
        self.home_path("java.log")
    }

    /// Invocations recorded by the scripted `java`, one per line
    pub fn java_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("NO_COLOR", "1")
            .env_remove("FAKE_JAVA_FAIL");

        for key in CLI_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute javacc-build");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        self.write_file(&self.project_path(relative_path), content);
    }

    /// Read a project file
    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
