//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - Compiles one grammar family into the generated-source tree

pub mod compile;

pub use compile::{CompileOptions, CompileOutcome, CompileUseCase};
