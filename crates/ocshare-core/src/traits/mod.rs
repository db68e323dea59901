//! Core traits defined in `ocshare-core` and implemented by other crates.

pub mod job;
pub mod sync_root;

pub use job::ShareJob;
pub use sync_root::{SyncRoot, SyncRootRegistry};
