//! Share domain entities.

pub mod any;
pub mod link;
pub mod model;
pub mod sharee;

pub use any::AnyShare;
pub use link::{LinkShare, NewLinkShare};
pub use model::Share;
pub use sharee::Sharee;

use std::sync::RwLock;

/// Read a field guarded by an entity lock, recovering from poisoning.
pub(crate) fn read_field<T: Clone>(lock: &RwLock<T>) -> T {
    lock.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Overwrite a field guarded by an entity lock, recovering from poisoning.
pub(crate) fn write_field<T>(lock: &RwLock<T>, value: T) {
    *lock.write().unwrap_or_else(|e| e.into_inner()) = value;
}
