//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_events;
pub mod process_runner;

pub use compile_events::{CompileEvent, CompileEventSink, NoopEventSink};
pub use process_runner::{JavaInvocation, ProcessError, ProcessOutput, ProcessRunner};
