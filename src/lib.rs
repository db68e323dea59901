//! ocshare: share management for ownCloud-style OCS servers.
//!
//! Wires the workspace crates together: configuration, logging, the sync
//! root registry and the [`ShareManager`].

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub use ocshare_core::config::AppConfig;
pub use ocshare_core::config::logging::LoggingConfig;
pub use ocshare_core::error::{AppError, ErrorKind};
pub use ocshare_core::result::AppResult;
pub use ocshare_core::traits::{ShareJob, SyncRoot, SyncRootRegistry};
pub use ocshare_core::types::{OcsReply, ServerVersion, SharePermissions, ShareType};
pub use ocshare_entity::account::Account;
pub use ocshare_entity::share::{AnyShare, LinkShare, Share, Sharee};
pub use ocshare_folder::{FolderRegistry, MemorySyncRoot};
pub use ocshare_service::{InvalidationNotifier, ShareEvent, ShareManager, ShareOperation};

/// A configured share manager and the sync roots it notifies.
#[derive(Debug, Clone)]
pub struct ShareSession {
    /// Issues share operations for the configured account.
    pub manager: ShareManager,
    /// Sync roots of the configured account.
    pub registry: Arc<FolderRegistry>,
}

/// Load configuration for the environment named by `OCSHARE_ENV`
/// (default `development`).
pub fn load_configuration() -> AppResult<AppConfig> {
    let env = std::env::var("OCSHARE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    installed.map_err(|e| AppError::internal(format!("Failed to install logger: {e}")))
}

/// Build the share manager for the configured account on top of `job`.
pub fn bootstrap(config: &AppConfig, job: Arc<dyn ShareJob>) -> AppResult<ShareSession> {
    let account = Arc::new(Account::from_config(&config.account)?);
    let registry = Arc::new(FolderRegistry::from_config(account.id(), &config.sync));
    let notifier = InvalidationNotifier::new(registry.clone());
    let manager = ShareManager::new(account.clone(), job, notifier);

    info!(
        account = %account.id(),
        user = %account.user(),
        server = %account.url(),
        server_version = %account.server_version(),
        "Share manager ready"
    );
    Ok(ShareSession { manager, registry })
}
