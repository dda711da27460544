//! Configuration type definitions

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GrammarFamily;
use crate::error::GrammarResult;

use super::loader::{self, ConfigWarning};

/// A compiler option value; TOML booleans and integers are accepted as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Bool(b) => write!(f, "{}", b),
            ArgumentValue::Int(i) => write!(f, "{}", i),
            ArgumentValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(s: &str) -> Self {
        ArgumentValue::Text(s.to_string())
    }
}

/// Per-family task configuration
///
/// Unset directories fall back to the family defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaskConfig {
    #[serde(default)]
    pub input_dir: Option<PathBuf>,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub temp_dir: Option<PathBuf>,

    #[serde(default)]
    pub suffix: Option<String>,

    /// Hand-written source roots that take precedence over generated classes
    #[serde(default)]
    pub custom_sources: Vec<PathBuf>,

    #[serde(default)]
    pub arguments: BTreeMap<String, ArgumentValue>,
}

impl TaskConfig {
    /// Compiler options rendered as strings
    pub fn argument_strings(&self) -> BTreeMap<String, String> {
        self.arguments
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count onto a level, never lowering `base`
    pub fn raised_by(self, count: u8) -> Self {
        let requested = match count {
            0 => self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        std::cmp::max(self, requested)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Build directory, relative to the project root
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    /// Java launcher
    #[serde(default = "default_java")]
    pub java: PathBuf,

    /// Archives containing the grammar compilers
    #[serde(default)]
    pub classpath: Vec<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub javacc: TaskConfig,

    #[serde(default)]
    pub jjtree: TaskConfig,

    #[serde(default)]
    pub jjdoc: TaskConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            java: default_java(),
            classpath: Vec::new(),
            output: OutputConfig::default(),
            javacc: TaskConfig::default(),
            jjtree: TaskConfig::default(),
            jjdoc: TaskConfig::default(),
        }
    }
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_java() -> PathBuf {
    PathBuf::from(crate::infrastructure::process::DEFAULT_JAVA)
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GrammarResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> GrammarResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    pub fn task(&self, family: GrammarFamily) -> &TaskConfig {
        match family {
            GrammarFamily::JavaCC => &self.javacc,
            GrammarFamily::JJTree => &self.jjtree,
            GrammarFamily::JJDoc => &self.jjdoc,
        }
    }

    pub fn task_mut(&mut self, family: GrammarFamily) -> &mut TaskConfig {
        match family {
            GrammarFamily::JavaCC => &mut self.javacc,
            GrammarFamily::JJTree => &mut self.jjtree,
            GrammarFamily::JJDoc => &mut self.jjdoc,
        }
    }

    /// Build directory resolved against `project_root`
    pub fn build_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build_dir)
    }
}
