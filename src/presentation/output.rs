//! Output Rendering
//!
//! Text shown outside of a compile run: the task listing, config warnings
//! and the NDJSON error record.

use std::fmt::Write as _;
use std::path::Path;

use crate::application::CompileOptions;
use crate::config::{Config, ConfigWarning};
use crate::domain::value_objects::{GrammarFamily, DEFAULT_COMPILER_DEPENDENCY, TASK_GROUP};
use crate::error::GrammarError;

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Render the registered tasks with their effective settings
///
/// Paths are shown relative to `project_root` when they live under it.
pub fn render_tasks(config: &Config, project_root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} tasks", TASK_GROUP);
    let _ = writeln!(out, "compiler: {}", DEFAULT_COMPILER_DEPENDENCY);

    for family in GrammarFamily::ALL {
        let options = CompileOptions::from_config(family, config, project_root);
        let _ = writeln!(out);
        let _ = writeln!(out, "{} - {}", family.task_name(), family.description());
        let _ = writeln!(out, "  main class: {}", family.main_class());
        let _ = writeln!(
            out,
            "  input:      {} (*{})",
            relative_to(&options.input_dir, project_root),
            options.suffix
        );
        let _ = writeln!(
            out,
            "  output:     {}",
            relative_to(&options.output_dir, project_root)
        );
        let _ = writeln!(
            out,
            "  temp:       {}",
            relative_to(&options.temp_dir, project_root)
        );
        if !options.arguments.is_empty() {
            let args: Vec<String> = options
                .arguments
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            let _ = writeln!(out, "  arguments:  {}", args.join(" "));
        }
    }

    out
}

/// Print unknown-key warnings to stderr
pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// NDJSON record for a failed task
pub fn render_error_json(family: GrammarFamily, error: &GrammarError) -> serde_json::Value {
    let mut json = serde_json::json!({
        "event": "error",
        "task": family.task_name(),
        "message": error.to_string(),
    });
    if let Some(code) = error.exit_code() {
        json["exit_code"] = serde_json::json!(code);
    }
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArgumentValue;
    use std::path::PathBuf;

    #[test]
    fn tasks_listing_uses_configured_paths() {
        let root = PathBuf::from("/work/project");
        let mut config = Config::default();
        config.jjtree.input_dir = Some(PathBuf::from("grammars"));
        config
            .javacc
            .arguments
            .insert("STATIC".to_string(), ArgumentValue::Bool(false));

        let text = render_tasks(&config, &root);

        assert!(text.contains("  input:      grammars (*.jjt)"));
        assert!(text.contains("  arguments:  STATIC=false"));
        assert!(text.contains("  temp:       build/tmp/compileJjdoc"));
    }

    #[test]
    fn error_json_carries_exit_code() {
        let error = GrammarError::CompilerExit {
            program: "JJTree".to_string(),
            file: PathBuf::from("A.jjt"),
            code: 1,
        };

        let json = render_error_json(GrammarFamily::JJTree, &error);

        assert_eq!(json["event"], "error");
        assert_eq!(json["task"], "compileJjtree");
        assert_eq!(json["exit_code"], 1);
    }

    #[test]
    fn error_json_omits_exit_code_for_other_failures() {
        let error = GrammarError::InvalidOptions("empty suffix".to_string());
        let json = render_error_json(GrammarFamily::JavaCC, &error);
        assert!(json.get("exit_code").is_none());
    }
}
