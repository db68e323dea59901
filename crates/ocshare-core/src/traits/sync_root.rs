//! Local sync collaborator traits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::result::AppResult;

/// One locally configured sync root (a local folder mirroring a remote path).
#[async_trait]
pub trait SyncRoot: Send + Sync + std::fmt::Debug + 'static {
    /// Identifier of the account the root belongs to.
    fn account_id(&self) -> &str;

    /// Absolute remote path the root mirrors.
    fn remote_path(&self) -> &str;

    /// Make the next sync pass ignore locally cached listing state for
    /// `relative_path` (relative to the root, no leading `/`).
    async fn invalidate_cached_entry(&self, relative_path: &str) -> AppResult<()>;

    /// Ask for a sync pass of this root as soon as possible.
    async fn schedule_expedited_sync(&self);
}

/// Enumerates the sync roots configured on this machine.
pub trait SyncRootRegistry: Send + Sync + std::fmt::Debug + 'static {
    /// Every configured root, across all accounts.
    fn roots(&self) -> Vec<Arc<dyn SyncRoot>>;
}
