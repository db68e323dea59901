//! # ocshare-core
//!
//! Core crate for ocshare. Contains the outbound traits (request execution
//! and local sync collaborators), configuration schemas, the share
//! vocabulary types (permissions, share types, server versions, the OCS
//! reply envelope), and the unified error system.
//!
//! This crate has **no** internal dependencies on other ocshare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
