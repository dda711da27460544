//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic copy, temp directory lifecycle, run lock
//! - `process/` - Java process runner
//! - `events/` - Console and NDJSON event sinks

pub mod events;
pub mod fs;
pub mod process;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{atomic_copy, RunLock, TempOutputDir};
pub use process::JavaProcessRunner;
