//! JSON Event Sink
//!
//! Outputs compile events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CompileEvent, CompileEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        let json = match event {
            CompileEvent::Started {
                task,
                input,
                output,
                temp,
            } => serde_json::json!({
                "event": "start",
                "task": task,
                "input": input.display().to_string(),
                "output": output.display().to_string(),
                "temp": temp.display().to_string(),
            }),

            CompileEvent::Discovered {
                compilable,
                passthrough,
            } => serde_json::json!({
                "event": "discovered",
                "compilable": compilable,
                "passthrough": passthrough,
            }),

            CompileEvent::FileCompiling { index, path, args } => serde_json::json!({
                "event": "item_start",
                "index": index,
                "path": path.display().to_string(),
                "args": args,
            }),

            CompileEvent::FileCompiled { index, path } => serde_json::json!({
                "event": "item_compiled",
                "index": index,
                "path": path.display().to_string(),
            }),

            CompileEvent::CompilerOutput {
                path,
                stdout,
                stderr,
            } => serde_json::json!({
                "event": "compiler_output",
                "path": path.display().to_string(),
                "stdout": stdout,
                "stderr": stderr,
            }),

            CompileEvent::ArtifactSkipped { path, reason } => serde_json::json!({
                "event": "item_skipped",
                "path": path.display().to_string(),
                "reason": reason,
            }),

            CompileEvent::Reconciled {
                compiled,
                passthrough,
            } => serde_json::json!({
                "event": "reconciled",
                "compiled": compiled,
                "passthrough": passthrough,
            }),

            CompileEvent::CleanupFailed { path, error } => serde_json::json!({
                "event": "cleanup_failed",
                "path": path.display().to_string(),
                "error": error,
            }),

            CompileEvent::Completed {
                task,
                compiled,
                copied,
            } => serde_json::json!({
                "event": "complete",
                "task": task,
                "status": "success",
                "compiled": compiled,
                "copied": copied,
            }),
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(CompileEvent::Started {
            task: "compileJavacc".to_string(),
            input: PathBuf::from("src/main/javacc"),
            output: PathBuf::from("build/generated/javacc"),
            temp: PathBuf::from("build/tmp/compileJavacc"),
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"start\""));
        assert!(output.contains("\"task\":\"compileJavacc\""));
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(CompileEvent::Discovered {
            compilable: 2,
            passthrough: 1,
        });
        sink.on_event(CompileEvent::Completed {
            task: "compileJjtree".to_string(),
            compiled: 2,
            copied: 3,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let complete: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(complete["event"], "complete");
        assert_eq!(complete["compiled"], 2);
    }

    #[test]
    fn json_sink_reports_cleanup_failures() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(CompileEvent::CleanupFailed {
            path: PathBuf::from("build/tmp/compileJjdoc"),
            error: "busy".to_string(),
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"cleanup_failed\""));
        assert!(output.contains("busy"));
    }
}
