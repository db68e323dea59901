//! Share entity model.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use ocshare_core::types::{SharePermissions, ShareType};

use super::sharee::Sharee;
use super::{read_field, write_field};
use crate::account::Account;

/// A grant of access to one remote path.
///
/// Identity fields are immutable. `permissions` and the deletion marker are
/// written only by the completion of the update that targets them, through
/// [`Share::apply_permissions`] and [`Share::mark_deleted`].
#[derive(Debug)]
pub struct Share {
    /// Session the share was fetched through.
    account: Arc<Account>,
    /// Server-assigned identifier, in canonical string form.
    id: String,
    /// Absolute remote path the share applies to.
    path: String,
    /// Kind of recipient.
    share_type: ShareType,
    /// Granted capabilities.
    permissions: RwLock<SharePermissions>,
    /// Recipient, for non-link shares.
    share_with: Option<Sharee>,
    /// Set once the server confirmed deletion.
    deleted: AtomicBool,
}

impl Share {
    /// Create a share entity from parsed reply fields.
    pub fn new(
        account: Arc<Account>,
        id: impl Into<String>,
        path: impl Into<String>,
        share_type: ShareType,
        permissions: SharePermissions,
        share_with: Option<Sharee>,
    ) -> Self {
        Self {
            account,
            id: id.into(),
            path: path.into(),
            share_type,
            permissions: RwLock::new(permissions),
            share_with,
            deleted: AtomicBool::new(false),
        }
    }

    /// Session the share belongs to.
    pub fn account(&self) -> &Arc<Account> {
        &self.account
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Absolute remote path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Kind of recipient.
    pub fn share_type(&self) -> ShareType {
        self.share_type
    }

    /// Currently known permissions.
    pub fn permissions(&self) -> SharePermissions {
        read_field(&self.permissions)
    }

    /// Recipient, absent for link shares.
    pub fn share_with(&self) -> Option<&Sharee> {
        self.share_with.as_ref()
    }

    /// Whether the server confirmed deletion of this share.
    pub fn is_deleted(&self) -> bool {
        self.deleted.load(Ordering::Acquire)
    }

    /// Record permissions the server accepted.
    pub fn apply_permissions(&self, permissions: SharePermissions) {
        write_field(&self.permissions, permissions);
    }

    /// Record that the server deleted this share.
    pub fn mark_deleted(&self) {
        self.deleted.store(true, Ordering::Release);
    }
}
