//! Account (session context) entities.

pub mod model;

pub use model::Account;
