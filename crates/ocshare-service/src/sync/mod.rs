//! Keeping the local sync layer in step with share changes.

pub mod notifier;

pub use notifier::{InvalidationNotifier, relative_to_root};
