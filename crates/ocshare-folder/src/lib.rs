//! # ocshare-folder
//!
//! In-process implementation of the local sync collaborator: sync roots
//! that remember which entries must not be served from the local journal
//! on the next pass, count expedited sync requests, and a registry that
//! enumerates them.
//!
//! A real sync engine implements [`SyncRoot`](ocshare_core::traits::SyncRoot)
//! over its own journal; this crate backs tests, demos and single-process
//! embeddings.

pub mod registry;
pub mod root;

pub use registry::FolderRegistry;
pub use root::MemorySyncRoot;
