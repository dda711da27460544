//! Program Arguments Value Object
//!
//! Ordered command-line builder for a single compiler invocation.
//! Named options render as `-NAME=value`, files render as their path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Argument {
    Named { name: String, value: String },
    File(PathBuf),
}

/// Ordered compiler arguments, built fresh for every compiled file
///
/// Registering a name twice overwrites the earlier value but keeps its
/// position. Empty names and empty values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramArguments {
    entries: Vec<Argument>,
}

impl ProgramArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append (or overwrite) a named option
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        if name.is_empty() || value.is_empty() {
            return self;
        }

        let existing = self.entries.iter_mut().find_map(|entry| match entry {
            Argument::Named { name: n, value: v } if *n == name => Some(v),
            _ => None,
        });

        match existing {
            Some(slot) => *slot = value,
            None => self.entries.push(Argument::Named { name, value }),
        }
        self
    }

    /// Append every option of a user-supplied map, in name order
    pub fn add_all(&mut self, options: &BTreeMap<String, String>) -> &mut Self {
        for (name, value) in options {
            self.add(name.as_str(), value.as_str());
        }
        self
    }

    /// Append a positional file argument
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() {
            self.entries.push(Argument::File(path.to_path_buf()));
        }
        self
    }

    /// Value registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            Argument::Named { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat token list handed to the process, in insertion order
    pub fn to_vec(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| match entry {
                Argument::Named { name, value } => format!("-{}={}", name, value),
                Argument::File(path) => path.display().to_string(),
            })
            .collect()
    }
}
