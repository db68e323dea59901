//! Registry of configured sync roots.

use std::sync::{Arc, RwLock};

use tracing::info;

use ocshare_core::config::sync::SyncConfig;
use ocshare_core::traits::{SyncRoot, SyncRootRegistry};

use crate::root::MemorySyncRoot;

/// Every sync root known to this process, across accounts.
#[derive(Debug, Default)]
pub struct FolderRegistry {
    roots: RwLock<Vec<Arc<MemorySyncRoot>>>,
}

impl FolderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the configured roots of one account.
    pub fn from_config(account_id: &str, config: &SyncConfig) -> Self {
        let registry = Self::new();
        for root in &config.roots {
            registry.add_root(Arc::new(MemorySyncRoot::new(account_id, root)));
        }
        info!(account = %account_id, roots = config.roots.len(), "Sync roots registered");
        registry
    }

    /// Register another root.
    pub fn add_root(&self, root: Arc<MemorySyncRoot>) {
        self.roots
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(root);
    }

    /// Look a root up by alias.
    pub fn root(&self, alias: &str) -> Option<Arc<MemorySyncRoot>> {
        self.roots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|root| root.alias() == alias)
            .cloned()
    }

    /// Every registered root, in registration order.
    pub fn all(&self) -> Vec<Arc<MemorySyncRoot>> {
        self.roots.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SyncRootRegistry for FolderRegistry {
    fn roots(&self) -> Vec<Arc<dyn SyncRoot>> {
        self.all()
            .into_iter()
            .map(|root| root as Arc<dyn SyncRoot>)
            .collect()
    }
}
