//! Grammar Family Value Object
//!
//! The three compiler variants. They differ only in naming, directory
//! defaults, suffix, entry point and the option used to point the compiler
//! at the temp tree.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::ports::{CompileEvent, CompileEventSink, JavaInvocation, ProcessRunner};
use crate::domain::value_objects::{CompilationUnit, ProgramArguments};
use crate::error::{GrammarError, GrammarResult};

/// Task group shown by `tasks`
pub const TASK_GROUP: &str = "JavaCC";

/// Compiler artifact the build expects on the classpath
pub const DEFAULT_COMPILER_DEPENDENCY: &str = "net.java.dev.javacc:javacc:6.1.2";

/// How a variant tells its compiler where to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputHint {
    /// Option naming the directory that receives the artifacts
    Directory(&'static str),
    /// Option naming a single output file, `<stem>.<extension>` in that directory
    File {
        option: &'static str,
        extension: &'static str,
    },
}

/// A grammar compiler family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarFamily {
    JavaCC,
    JJTree,
    JJDoc,
}

impl GrammarFamily {
    /// Execution order used by `all`: JJTree feeds JavaCC
    pub const ALL: [GrammarFamily; 3] = [
        GrammarFamily::JJTree,
        GrammarFamily::JavaCC,
        GrammarFamily::JJDoc,
    ];

    /// Config/CLI key
    pub fn key(&self) -> &'static str {
        match self {
            GrammarFamily::JavaCC => "javacc",
            GrammarFamily::JJTree => "jjtree",
            GrammarFamily::JJDoc => "jjdoc",
        }
    }

    pub fn task_name(&self) -> &'static str {
        match self {
            GrammarFamily::JavaCC => "compileJavacc",
            GrammarFamily::JJTree => "compileJjtree",
            GrammarFamily::JJDoc => "compileJjdoc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GrammarFamily::JavaCC => "Compiles JavaCC files into Java files",
            GrammarFamily::JJTree => "Compiles JJTree files into JavaCC files",
            GrammarFamily::JJDoc => "Generates documentation for JavaCC grammar files",
        }
    }

    /// Name used in failure messages
    pub fn program_name(&self) -> &'static str {
        match self {
            GrammarFamily::JavaCC => "JavaCC",
            GrammarFamily::JJTree => "JJTree",
            GrammarFamily::JJDoc => "JJDoc",
        }
    }

    pub fn main_class(&self) -> &'static str {
        match self {
            GrammarFamily::JavaCC => "org.javacc.parser.Main",
            GrammarFamily::JJTree => "org.javacc.jjtree.Main",
            GrammarFamily::JJDoc => "org.javacc.jjdoc.JJDocMain",
        }
    }

    /// Input directory, relative to the project root
    pub fn default_input_dir(&self) -> PathBuf {
        match self {
            GrammarFamily::JavaCC | GrammarFamily::JJDoc => Path::new("src").join("main").join("javacc"),
            GrammarFamily::JJTree => Path::new("src").join("main").join("jjtree"),
        }
    }

    /// Output directory, relative to the build directory
    pub fn default_output_dir(&self) -> PathBuf {
        Path::new("generated").join(self.key())
    }

    /// Temp directory, relative to the build directory
    pub fn default_temp_dir(&self) -> PathBuf {
        Path::new("tmp").join(self.task_name())
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            GrammarFamily::JavaCC | GrammarFamily::JJDoc => ".jj",
            GrammarFamily::JJTree => ".jjt",
        }
    }

    fn output_hint(&self) -> OutputHint {
        match self {
            GrammarFamily::JavaCC => OutputHint::Directory("OUTPUT_DIRECTORY"),
            GrammarFamily::JJTree => OutputHint::Directory("JJTREE_OUTPUT_DIRECTORY"),
            GrammarFamily::JJDoc => OutputHint::File {
                option: "OUTPUT_FILE",
                extension: "html",
            },
        }
    }

    /// Add the variant's output hint for `unit`
    ///
    /// Called after user options and before the input file is appended, so
    /// the hint overrides a user option of the same name.
    pub fn augment_arguments(&self, unit: &CompilationUnit, arguments: &mut ProgramArguments) {
        let parent = unit.temp_parent();
        match self.output_hint() {
            OutputHint::Directory(option) => {
                arguments.add(option, parent.display().to_string());
            }
            OutputHint::File { option, extension } => {
                let file = parent.join(format!("{}.{}", unit.stem(), extension));
                arguments.add(option, file.display().to_string());
            }
        }
    }

    /// Run the compiler for one unit
    ///
    /// A launch failure maps to `Launch`, a nonzero exit to `CompilerExit`
    /// carrying the exit code (`-1` when killed by a signal).
    pub fn invoke_compiler(
        &self,
        runner: &dyn ProcessRunner,
        classpath: &[PathBuf],
        arguments: &ProgramArguments,
        unit: &CompilationUnit,
        events: &dyn CompileEventSink,
    ) -> GrammarResult<()> {
        let invocation = JavaInvocation {
            classpath: classpath.to_vec(),
            main_class: self.main_class().to_string(),
            args: arguments.to_vec(),
        };

        let output = runner
            .run(&invocation)
            .map_err(|e| GrammarError::Launch {
                program: self.program_name().to_string(),
                message: e.to_string(),
            })?;

        if events.wants_detailed_events()
            && (!output.stdout.is_empty() || !output.stderr.is_empty())
        {
            events.on_event(CompileEvent::CompilerOutput {
                path: unit.relative.clone(),
                stdout: output.stdout.clone(),
                stderr: output.stderr.clone(),
            });
        }

        if output.is_success() {
            return Ok(());
        }

        Err(GrammarError::CompilerExit {
            program: self.program_name().to_string(),
            file: unit.relative.clone(),
            code: output.exit_code.unwrap_or(-1),
        })
    }
}

impl fmt::Display for GrammarFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program_name())
    }
}

impl FromStr for GrammarFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "javacc" | "compilejavacc" => Ok(GrammarFamily::JavaCC),
            "jjtree" | "compilejjtree" => Ok(GrammarFamily::JJTree),
            "jjdoc" | "compilejjdoc" => Ok(GrammarFamily::JJDoc),
            other => Err(format!("unknown grammar family '{}'", other)),
        }
    }
}
