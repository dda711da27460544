//! Compile options

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::value_objects::GrammarFamily;
use crate::error::{GrammarError, GrammarResult};

/// Fully resolved settings for one task run
///
/// Fixed before the run starts; nothing here changes while it executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub family: GrammarFamily,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub suffix: String,
    pub classpath: Vec<PathBuf>,
    /// User compiler options, passed before the output hint
    pub arguments: BTreeMap<String, String>,
    /// Hand-written source roots that shadow generated classes
    pub custom_sources: Vec<PathBuf>,
}

impl CompileOptions {
    /// Family defaults under `project_root` with build directory `build`
    pub fn for_family(family: GrammarFamily, project_root: &Path) -> Self {
        let build_dir = project_root.join("build");
        Self {
            family,
            input_dir: project_root.join(family.default_input_dir()),
            output_dir: build_dir.join(family.default_output_dir()),
            temp_dir: build_dir.join(family.default_temp_dir()),
            suffix: family.suffix().to_string(),
            classpath: Vec::new(),
            arguments: BTreeMap::new(),
            custom_sources: Vec::new(),
        }
    }

    /// Resolve a family's settings from configuration
    ///
    /// Relative paths are taken from `project_root`; output and temp
    /// defaults live under the configured build directory.
    pub fn from_config(family: GrammarFamily, config: &Config, project_root: &Path) -> Self {
        let task = config.task(family);
        let build_dir = config.build_dir_in(project_root);
        let resolve = |p: &PathBuf| project_root.join(p);

        Self {
            family,
            input_dir: task
                .input_dir
                .as_ref()
                .map(resolve)
                .unwrap_or_else(|| project_root.join(family.default_input_dir())),
            output_dir: task
                .output_dir
                .as_ref()
                .map(resolve)
                .unwrap_or_else(|| build_dir.join(family.default_output_dir())),
            temp_dir: task
                .temp_dir
                .as_ref()
                .map(resolve)
                .unwrap_or_else(|| build_dir.join(family.default_temp_dir())),
            suffix: task
                .suffix
                .clone()
                .unwrap_or_else(|| family.suffix().to_string()),
            classpath: config.classpath.iter().map(resolve).collect(),
            arguments: task.argument_strings(),
            custom_sources: task.custom_sources.iter().map(resolve).collect(),
        }
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_classpath(mut self, classpath: Vec<PathBuf>) -> Self {
        self.classpath = classpath;
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn with_custom_source(mut self, root: impl Into<PathBuf>) -> Self {
        self.custom_sources.push(root.into());
        self
    }

    /// Reject layouts where cleanup would destroy inputs or outputs
    pub fn validate(&self) -> GrammarResult<()> {
        if self.suffix.is_empty() {
            return Err(GrammarError::InvalidOptions(
                "file suffix must not be empty".to_string(),
            ));
        }

        for (name, dir) in [("input", &self.input_dir), ("output", &self.output_dir)] {
            if dir.starts_with(&self.temp_dir) {
                return Err(GrammarError::InvalidOptions(format!(
                    "temp directory {} must not contain the {} directory {}",
                    self.temp_dir.display(),
                    name,
                    dir.display()
                )));
            }
        }

        for (name, dir) in [("input", &self.input_dir), ("output", &self.output_dir)] {
            if self.temp_dir.starts_with(dir) {
                return Err(GrammarError::InvalidOptions(format!(
                    "temp directory {} must not be inside the {} directory {}",
                    self.temp_dir.display(),
                    name,
                    dir.display()
                )));
            }
        }

        // Output below input is picked up as pass-through on the next run
        if self.output_dir != self.input_dir && self.output_dir.starts_with(&self.input_dir) {
            return Err(GrammarError::InvalidOptions(format!(
                "output directory {} must not be inside the input directory {}",
                self.output_dir.display(),
                self.input_dir.display()
            )));
        }

        Ok(())
    }
}
