//! Compile Use Case
//!
//! Orchestrates one grammar compiler family over a source tree.
//!
//! This module handles:
//! - Preparing and removing the temp output directory
//! - Invoking the compiler once per grammar file
//! - Promoting compiler output and pass-through files into the output tree

mod options;
mod reconcile;
mod result;
mod use_case;

pub use options::CompileOptions;
pub use result::CompileOutcome;
pub use use_case::CompileUseCase;
