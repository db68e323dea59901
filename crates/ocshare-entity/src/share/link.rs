//! Link share entity model.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use ocshare_core::types::{SharePermissions, ShareType};

use super::model::Share;
use super::{read_field, write_field};
use crate::account::Account;

/// Data required to build a [`LinkShare`] from a parsed reply.
#[derive(Debug, Clone)]
pub struct NewLinkShare {
    /// Server-assigned identifier, already normalized.
    pub id: String,
    /// Absolute remote path.
    pub path: String,
    /// Link label.
    pub name: String,
    /// Public token.
    pub token: String,
    /// Granted capabilities.
    pub permissions: SharePermissions,
    /// Whether the link is password protected.
    pub password_set: bool,
    /// Public URL, exactly as the server sent it or as derived from the token.
    pub url: String,
    /// Expiration day, if any.
    pub expire_date: Option<NaiveDate>,
}

/// A public link share: a [`Share`] of type [`ShareType::Link`] plus the
/// link's label, token, password flag, expiration and URL.
///
/// The URL is fixed at parse time from the token and the server version;
/// nothing else writes it.
#[derive(Debug)]
pub struct LinkShare {
    share: Share,
    name: RwLock<String>,
    token: String,
    password_set: RwLock<bool>,
    expire_date: RwLock<Option<NaiveDate>>,
    url: String,
}

impl LinkShare {
    /// Create a link share entity.
    pub fn new(account: Arc<Account>, parts: NewLinkShare) -> Self {
        Self {
            share: Share::new(
                account,
                parts.id,
                parts.path,
                ShareType::Link,
                parts.permissions,
                None,
            ),
            name: RwLock::new(parts.name),
            token: parts.token,
            password_set: RwLock::new(parts.password_set),
            expire_date: RwLock::new(parts.expire_date),
            url: parts.url,
        }
    }

    /// The generic share part (id, path, permissions).
    pub fn share(&self) -> &Share {
        &self.share
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> &str {
        self.share.id()
    }

    /// Absolute remote path.
    pub fn path(&self) -> &str {
        self.share.path()
    }

    /// Currently known permissions.
    pub fn permissions(&self) -> SharePermissions {
        self.share.permissions()
    }

    /// Link label.
    pub fn name(&self) -> String {
        read_field(&self.name)
    }

    /// Public token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the link is password protected.
    pub fn is_password_set(&self) -> bool {
        read_field(&self.password_set)
    }

    /// Expiration day, if any.
    pub fn expire_date(&self) -> Option<NaiveDate> {
        read_field(&self.expire_date)
    }

    /// Public URL of the link.
    pub fn link(&self) -> &str {
        &self.url
    }

    /// URL that downloads the shared item directly: the link with
    /// `/download` appended to its path, query and fragment kept.
    pub fn direct_download_link(&self) -> String {
        let end = self.url.find(['?', '#']).unwrap_or(self.url.len());
        format!("{}/download{}", &self.url[..end], &self.url[end..])
    }

    /// Whether anonymous visitors may upload (folder links).
    pub fn public_upload(&self) -> bool {
        self.permissions().contains(SharePermissions::CREATE)
    }

    /// Whether anonymous visitors may list the folder contents.
    pub fn show_file_listing(&self) -> bool {
        self.permissions().contains(SharePermissions::READ)
    }

    /// Record a name the server accepted.
    pub fn apply_name(&self, name: impl Into<String>) {
        write_field(&self.name, name.into());
    }

    /// Record whether the link is now password protected.
    pub fn apply_password_set(&self, password_set: bool) {
        write_field(&self.password_set, password_set);
    }

    /// Record an expiration the server accepted.
    pub fn apply_expire_date(&self, expire_date: Option<NaiveDate>) {
        write_field(&self.expire_date, expire_date);
    }
}
