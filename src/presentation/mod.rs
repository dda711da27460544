//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Wires the Java runner and the chosen event sink into a use case
//! - `output` - Task listing, config warnings, error reporting
//!
//! ## Usage
//!
//! ```ignore
//! use javacc_build::presentation::factory;
//!
//! let use_case = factory::create_compile_use_case(&config, false);
//! let outcome = use_case.execute(&options)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_compile_use_case, create_event_sink, ConcreteCompileUseCase};
pub use output::{print_config_warnings, render_error_json, render_tasks};
