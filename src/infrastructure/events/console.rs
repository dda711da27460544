//! Console Event Sink
//!
//! Human-readable progress on stderr. In `auto` colour mode, colour is only
//! used when stderr is a terminal and `NO_COLOR` is unset.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::config::{ColorMode, Verbosity};
use crate::domain::ports::{CompileEvent, CompileEventSink};

const SUCCESS: &str = "✓";
const WARNING: &str = "⚠";
const ARROW: &str = "↳";

/// Event sink printing one line per interesting event
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    color: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity, color: ColorMode) -> Self {
        let color = match color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            verbosity,
            color,
        }
    }

    /// Uncoloured sink over a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbosity: Verbosity) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color: false,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }

    fn success(&self, text: &str) -> String {
        if self.color {
            format!("{} {}", SUCCESS.green(), text)
        } else {
            format!("{} {}", SUCCESS, text)
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.color {
            format!("{} {}", WARNING.yellow(), text)
        } else {
            format!("{} {}", WARNING, text)
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.dark_grey())
        } else {
            text.to_string()
        }
    }
}

impl CompileEventSink for ConsoleEventSink {
    fn on_event(&self, event: CompileEvent) {
        let verbose = self.verbosity >= Verbosity::Verbose;
        let debug = self.verbosity >= Verbosity::Debug;

        match event {
            CompileEvent::Started { task, input, output, .. } => {
                if self.verbosity > Verbosity::Quiet {
                    self.line(format!(
                        "> {} {} -> {}",
                        task,
                        input.display(),
                        output.display()
                    ));
                }
            }
            CompileEvent::Discovered {
                compilable,
                passthrough,
            } => {
                if verbose {
                    self.line(self.dim(&format!(
                        "  found {} grammar file(s), {} other file(s)",
                        compilable, passthrough
                    )));
                }
            }
            CompileEvent::FileCompiling { path, args, .. } => {
                if debug {
                    self.line(self.dim(&format!(
                        "  compiling {} [{}]",
                        path.display(),
                        args.join(" ")
                    )));
                }
            }
            CompileEvent::FileCompiled { path, .. } => {
                if verbose {
                    self.line(format!("  {}", self.success(&path.display().to_string())));
                }
            }
            CompileEvent::CompilerOutput { stdout, stderr, .. } => {
                if debug {
                    for l in stdout.lines() {
                        self.line(self.dim(&format!("    {}", l)));
                    }
                }
                // Compiler diagnostics are always worth showing
                if self.verbosity > Verbosity::Quiet {
                    for l in stderr.lines() {
                        self.line(format!("    {}", l));
                    }
                }
            }
            CompileEvent::ArtifactSkipped { path, reason } => {
                if verbose {
                    self.line(format!(
                        "  {} {}",
                        self.warning(&format!("skipped {}", path.display())),
                        self.dim(&format!("{} {}", ARROW, reason))
                    ));
                }
            }
            CompileEvent::Reconciled {
                compiled,
                passthrough,
            } => {
                if verbose {
                    self.line(self.dim(&format!(
                        "  promoted {} generated file(s), copied {} other file(s)",
                        compiled, passthrough
                    )));
                }
            }
            CompileEvent::CleanupFailed { path, error } => {
                self.line(self.warning(&format!(
                    "could not remove {}: {}",
                    path.display(),
                    error
                )));
            }
            CompileEvent::Completed {
                task,
                compiled,
                copied,
            } => {
                if self.verbosity > Verbosity::Quiet {
                    self.line(self.success(&format!(
                        "{}: {} compiled, {} file(s) written",
                        task, compiled, copied
                    )));
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity > Verbosity::Quiet
    }
}
