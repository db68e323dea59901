//! # ocshare-entity
//!
//! Entity models for ocshare. [`Share`](share::Share) and
//! [`LinkShare`](share::LinkShare) are created from server replies and
//! shared by handle (`Arc`) between the caller and the operations that
//! update them; their mutable fields use interior mutability so an update
//! completion can write the confirmed value in place.

pub mod account;
pub mod share;
