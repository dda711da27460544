//! Process Runner Implementations

mod java;

pub use java::{JavaProcessRunner, DEFAULT_JAVA};
