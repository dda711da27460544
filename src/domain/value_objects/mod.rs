//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod grammar_family;
mod program_arguments;
mod source_tree;

pub use grammar_family::{GrammarFamily, DEFAULT_COMPILER_DEPENDENCY, TASK_GROUP};
pub use program_arguments::ProgramArguments;
pub use source_tree::{CompilationUnit, FileKind, SourceFile, SourceTree};
