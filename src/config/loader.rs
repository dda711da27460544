//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GrammarError, GrammarResult};

use super::types::{Config, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "javacc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GrammarResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used for diagnostics
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> GrammarResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GrammarError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config path for `project_root`
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_FILE)
}

/// User config path (`<config dir>/javacc-build/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("javacc-build").join("config.toml"))
}

/// Load from project config, user config, or defaults
///
/// A config file that exists but fails to load is reported on stderr and
/// skipped.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = [project_root.map(project_config_path), user_config_path()];
    let loaded = first_loadable(candidates.iter().flatten(), |path, e| {
        eprintln!("⚠ Ignoring config {}: {}", path.display(), e);
    });
    with_env_overrides(loaded.unwrap_or_default())
}

/// First existing config in `paths` that loads; `report` sees every failure
pub(super) fn first_loadable<'a, I, F>(paths: I, mut report: F) -> Option<Config>
where
    I: IntoIterator<Item = &'a PathBuf>,
    F: FnMut(&Path, &GrammarError),
{
    for path in paths {
        if !path.exists() {
            continue;
        }
        match Config::load(path) {
            Ok(config) => return Some(config),
            Err(e) => report(path, &e),
        }
    }
    None
}

/// Apply environment variable overrides (JAVACC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var_os(name))
}

/// Apply overrides read through `lookup`
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<std::ffi::OsString>,
{
    // JAVACC_JAVA
    if let Some(java) = lookup("JAVACC_JAVA").filter(|v| !v.is_empty()) {
        config.java = PathBuf::from(java);
    }

    // JAVACC_CLASSPATH (platform path list)
    if let Some(classpath) = lookup("JAVACC_CLASSPATH").filter(|v| !v.is_empty()) {
        config.classpath = std::env::split_paths(&classpath).collect();
    }

    // JAVACC_BUILD_DIR
    if let Some(build_dir) = lookup("JAVACC_BUILD_DIR").filter(|v| !v.is_empty()) {
        config.build_dir = PathBuf::from(build_dir);
    }

    // JAVACC_VERBOSITY
    if let Some(verbosity) = lookup("JAVACC_VERBOSITY") {
        config.output.verbosity = match verbosity.to_string_lossy().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build_dir",
        "java",
        "classpath",
        "output",
        "verbosity",
        "color",
        "javacc",
        "jjtree",
        "jjdoc",
        "input_dir",
        "output_dir",
        "temp_dir",
        "suffix",
        "custom_sources",
        "arguments",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
