//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::CompileUseCase;
use crate::config::{ColorMode, Config, Verbosity};
use crate::domain::ports::CompileEventSink;
use crate::infrastructure::{ConsoleEventSink, JavaProcessRunner, JsonEventSink};

/// Type alias for the CompileUseCase used by the CLI
pub type ConcreteCompileUseCase = CompileUseCase<JavaProcessRunner, Box<dyn CompileEventSink>>;

/// Pick the event sink for the requested output mode
///
/// JSON goes to stdout as NDJSON; everything else is console progress on
/// stderr.
pub fn create_event_sink(
    json: bool,
    verbosity: Verbosity,
    color: ColorMode,
) -> Box<dyn CompileEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stderr(verbosity, color))
    }
}

/// Create a compile use case with all dependencies wired up
///
/// The Java executable comes from `config.java`.
pub fn create_compile_use_case(config: &Config, json: bool) -> ConcreteCompileUseCase {
    let runner = JavaProcessRunner::new(config.java.clone());
    let events = create_event_sink(json, config.output.verbosity, config.output.color);
    CompileUseCase::new(runner, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn use_case_runner_uses_configured_java() {
        let config = Config {
            java: PathBuf::from("/opt/jdk/bin/java"),
            ..Config::default()
        };
        let use_case = create_compile_use_case(&config, true);
        assert_eq!(use_case.runner().java(), &PathBuf::from("/opt/jdk/bin/java"));
    }

    #[test]
    fn quiet_console_sink_wants_no_details() {
        let sink = create_event_sink(false, Verbosity::Quiet, ColorMode::Never);
        assert!(!sink.wants_detailed_events());
    }

    #[test]
    fn json_sink_wants_details() {
        let sink = create_event_sink(true, Verbosity::Quiet, ColorMode::Never);
        assert!(sink.wants_detailed_events());
    }
}
