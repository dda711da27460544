//! javacc-build - grammar compilation for generated-source trees
//!
//! Locates JavaCC (`.jj`), JJTree (`.jjt`) and JJDoc grammar files, runs the
//! matching compiler once per file into a scratch tree that mirrors the
//! input layout, then merges the compiler output and every non-grammar file
//! into a single output directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompileOptions, CompileOutcome, CompileUseCase};
pub use config::{Config, Verbosity};
pub use domain::ports::{
    CompileEvent, CompileEventSink, JavaInvocation, NoopEventSink, ProcessError, ProcessOutput,
    ProcessRunner,
};
pub use domain::value_objects::{
    CompilationUnit, FileKind, GrammarFamily, ProgramArguments, SourceFile, SourceTree,
};
pub use error::{GrammarError, GrammarResult};
pub use infrastructure::{ConsoleEventSink, JavaProcessRunner, JsonEventSink};
