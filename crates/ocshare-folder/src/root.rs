//! In-memory sync root.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashSet;
use tokio::sync::Notify;
use tracing::debug;

use ocshare_core::config::sync::SyncRootConfig;
use ocshare_core::error::AppError;
use ocshare_core::result::AppResult;
use ocshare_core::traits::SyncRoot;

/// A sync root whose journal state lives in memory.
#[derive(Debug)]
pub struct MemorySyncRoot {
    /// Owning account.
    account_id: String,
    /// Display name.
    alias: String,
    /// Local directory.
    local_path: PathBuf,
    /// Remote path mirrored by this root.
    remote_path: String,
    /// Relative paths whose cached listing must be refetched.
    invalidated: DashSet<String>,
    /// Number of expedited sync requests received.
    sync_requests: AtomicU64,
    /// Wakes a sync loop waiting in [`MemorySyncRoot::sync_requested`].
    sync_wanted: Notify,
}

impl MemorySyncRoot {
    /// Create a root for `account_id` from its configuration.
    pub fn new(account_id: impl Into<String>, config: &SyncRootConfig) -> Self {
        Self {
            account_id: account_id.into(),
            alias: config.alias.clone(),
            local_path: PathBuf::from(&config.local_path),
            remote_path: config.remote_path.clone(),
            invalidated: DashSet::new(),
            sync_requests: AtomicU64::new(0),
            sync_wanted: Notify::new(),
        }
    }

    /// Display name.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Local directory.
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Whether the next pass must refetch `relative_path` from the server.
    pub fn is_invalidated(&self, relative_path: &str) -> bool {
        self.invalidated.contains(relative_path)
    }

    /// Drain the invalidated paths, sorted, for the next sync pass.
    pub fn take_invalidated(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.invalidated.iter().map(|p| p.key().clone()).collect();
        for path in &paths {
            self.invalidated.remove(path);
        }
        paths.sort();
        paths
    }

    /// Number of expedited sync requests received so far.
    pub fn sync_requests(&self) -> u64 {
        self.sync_requests.load(Ordering::Acquire)
    }

    /// Wait until an expedited sync is requested.
    pub async fn sync_requested(&self) {
        self.sync_wanted.notified().await;
    }
}

#[async_trait]
impl SyncRoot for MemorySyncRoot {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn remote_path(&self) -> &str {
        &self.remote_path
    }

    /// Invalidates the entry and every ancestor directory up to the root,
    /// since the server does not refresh the etags of parents either.
    async fn invalidate_cached_entry(&self, relative_path: &str) -> AppResult<()> {
        if relative_path.starts_with('/') {
            return Err(AppError::sync(format!(
                "Expected a path relative to '{}', got '{relative_path}'",
                self.remote_path
            )));
        }

        let mut current = relative_path;
        loop {
            self.invalidated.insert(current.to_string());
            match current.rfind('/') {
                Some(index) => current = &current[..index],
                None if current.is_empty() => break,
                None => current = "",
            }
        }

        debug!(root = %self.alias, path = %relative_path, "Cached entry invalidated");
        Ok(())
    }

    async fn schedule_expedited_sync(&self) {
        self.sync_requests.fetch_add(1, Ordering::AcqRel);
        self.sync_wanted.notify_one();
        debug!(
            root = %self.alias,
            local_path = %self.local_path.display(),
            "Expedited sync scheduled"
        );
    }
}
