//! Local sync root configuration.

use serde::{Deserialize, Serialize};

/// Sync roots configured for the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Every configured root, in configuration order.
    #[serde(default)]
    pub roots: Vec<SyncRootConfig>,
}

/// One local folder synchronized with a remote path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRootConfig {
    /// Short display name of the root.
    pub alias: String,
    /// Local directory the root is synced into.
    pub local_path: String,
    /// Absolute remote path the root mirrors.
    pub remote_path: String,
}
