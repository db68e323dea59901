//! Account entity model.

use url::Url;

use ocshare_core::config::account::AccountConfig;
use ocshare_core::result::AppResult;
use ocshare_core::types::ServerVersion;

/// The session context shares are created and parsed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Stable identifier, matched against sync roots.
    id: String,
    /// Login name of the acting principal.
    user: String,
    /// Server base URL.
    url: Url,
    /// Version the server reported.
    server_version: ServerVersion,
}

impl Account {
    /// Create an account from already validated parts.
    pub fn new(
        id: impl Into<String>,
        user: impl Into<String>,
        url: Url,
        server_version: ServerVersion,
    ) -> Self {
        Self {
            id: id.into(),
            user: user.into(),
            url,
            server_version,
        }
    }

    /// Build an account from its configuration section.
    pub fn from_config(config: &AccountConfig) -> AppResult<Self> {
        let url = Url::parse(&config.url)?;
        let server_version = config.server_version.parse()?;
        Ok(Self::new(&config.id, &config.user, url, server_version))
    }

    /// Stable account identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Login name of the acting principal.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Server base URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Version the server reported.
    pub fn server_version(&self) -> ServerVersion {
        self.server_version
    }
}
