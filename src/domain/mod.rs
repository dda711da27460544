//! Domain Layer
//!
//! Grammar compilation concepts without process or orchestration wiring.
//!
//! ## Structure
//!
//! - `value_objects/` - ProgramArguments, SourceTree, CompilationUnit, GrammarFamily
//! - `services/` - Source discovery
//! - `ports/` - Interface definitions for infrastructure (process runner, events)

pub mod ports;
pub mod services;
pub mod value_objects;
