//! Account (session context) configuration.

use serde::{Deserialize, Serialize};

/// The account whose shares are managed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Stable account identifier, used to match sync roots to the account.
    pub id: String,
    /// Login name of the acting principal.
    pub user: String,
    /// Server base URL, e.g. `https://cloud.example.com/owncloud/`.
    pub url: String,
    /// Version string reported by the server's status endpoint.
    #[serde(default = "default_server_version")]
    pub server_version: String,
}

fn default_server_version() -> String {
    "10.0.0".to_string()
}
