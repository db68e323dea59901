//! Core type definitions used across the ocshare workspace.

pub mod ocs;
pub mod permission;
pub mod share_type;
pub mod version;

pub use ocs::OcsReply;
pub use permission::SharePermissions;
pub use share_type::ShareType;
pub use version::ServerVersion;
