//! Domain Services
//!
//! Read-only source discovery over the input tree.

pub mod source_visitor;

pub use source_visitor::{list_files, visit};
