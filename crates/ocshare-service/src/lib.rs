//! # ocshare-service
//!
//! Share orchestration for ocshare. The [`ShareManager`] issues requests
//! through a [`ShareJob`](ocshare_core::traits::ShareJob), turns replies
//! into entities with the [`parser`](share::parser), negotiates
//! permissions for re-shares, publishes [`ShareEvent`]s, and tells the
//! local sync layer when a path's sharing state changed through the
//! [`InvalidationNotifier`].
//!
//! Services follow constructor injection: all collaborators are provided
//! at construction time via `Arc` references.

#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod share;
pub mod sync;

pub use share::{ShareEvent, ShareManager, ShareOperation};
pub use sync::InvalidationNotifier;
