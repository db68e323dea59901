//! Tells local sync roots that a remote item's share state changed.
//!
//! Share changes alter server-side metadata (etags, permission flags) that
//! the local journal would otherwise keep serving from cache, so every root
//! of the account that contains the item gets its cached entry invalidated
//! and an expedited sync scheduled.

use std::sync::Arc;

use tracing::{debug, warn};

use ocshare_core::traits::SyncRootRegistry;
use ocshare_entity::account::Account;

/// Fans share changes out to the matching sync roots.
#[derive(Debug, Clone)]
pub struct InvalidationNotifier {
    /// Source of the configured sync roots.
    registry: Arc<dyn SyncRootRegistry>,
}

impl InvalidationNotifier {
    /// Create a notifier over `registry`.
    pub fn new(registry: Arc<dyn SyncRootRegistry>) -> Self {
        Self { registry }
    }

    /// Invalidate `path` in every root of `account` that contains it and
    /// schedule those roots for an expedited sync.
    ///
    /// Returns the number of roots that were notified. A root failing to
    /// invalidate is logged and still scheduled; the others are unaffected.
    pub async fn notify(&self, account: &Account, path: &str) -> usize {
        let mut notified = 0;

        for root in self.registry.roots() {
            if root.account_id() != account.id() {
                continue;
            }
            let Some(relative) = relative_to_root(root.remote_path(), path) else {
                continue;
            };

            if let Err(e) = root.invalidate_cached_entry(relative).await {
                warn!(
                    root = %root.remote_path(),
                    path = %relative,
                    error = %e,
                    "Failed to invalidate cached entry"
                );
            }
            root.schedule_expedited_sync().await;
            notified += 1;
        }

        debug!(account = %account.id(), path = %path, roots = notified, "Sync roots notified");
        notified
    }
}

/// Path of `path` relative to the root mirroring `root`, without a leading
/// `/`, or `None` when the root does not contain it.
///
/// Containment is by path component: `/a/b` contains `/a/b` and `/a/b/c`
/// but not `/a/bc`.
pub fn relative_to_root<'a>(root: &str, path: &'a str) -> Option<&'a str> {
    let rest = path.strip_prefix(root)?;
    if !(rest.is_empty() || root.ends_with('/') || rest.starts_with('/')) {
        return None;
    }
    Some(rest.strip_prefix('/').unwrap_or(rest))
}
