//! File System Implementations
//!
//! Atomic file promotion, temp directory lifecycle and the per-task run lock.

mod copy;
mod lock;
mod temp_dir;

pub use copy::atomic_copy;
pub use lock::RunLock;
pub use temp_dir::TempOutputDir;
