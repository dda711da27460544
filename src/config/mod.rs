//! Configuration module for javacc-build
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (JAVACC_*)
//! 3. Project config (javacc.toml)
//! 4. User config (<config dir>/javacc-build/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    parse_with_warnings, project_config_path, user_config_path, with_env_overrides,
    with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ArgumentValue, ColorMode, Config, OutputConfig, TaskConfig, Verbosity};
