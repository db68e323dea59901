//! Request execution collaborator for the share endpoints.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::result::AppResult;
use crate::types::{OcsReply, SharePermissions, ShareType};

/// Performs one protocol exchange against the server's share API.
///
/// Each call resolves exactly once: `Ok` with the decoded reply, or an
/// [`AppError`](crate::error::AppError) of kind `Transport` carrying the
/// status code and message the server reported. Timeouts, authentication
/// and retries are the implementor's business.
#[async_trait]
pub trait ShareJob: Send + Sync + std::fmt::Debug + 'static {
    /// List the shares on `path` created by the acting principal.
    async fn get_shares(&self, path: &str) -> AppResult<OcsReply>;

    /// List the shares other principals granted to the acting principal.
    async fn get_shared_with_me(&self) -> AppResult<OcsReply>;

    /// Create a share of `path` with a user, group or other recipient.
    async fn create_share(
        &self,
        path: &str,
        share_type: ShareType,
        share_with: &str,
        permissions: SharePermissions,
    ) -> AppResult<OcsReply>;

    /// Create a public link share of `path`. An empty `password` means none.
    async fn create_link_share(&self, path: &str, name: &str, password: &str)
    -> AppResult<OcsReply>;

    /// Change the permissions of share `id`.
    async fn set_permissions(&self, id: &str, permissions: SharePermissions)
    -> AppResult<OcsReply>;

    /// Rename link share `id`.
    async fn set_name(&self, id: &str, name: &str) -> AppResult<OcsReply>;

    /// Set or clear (empty string) the password of link share `id`.
    async fn set_password(&self, id: &str, password: &str) -> AppResult<OcsReply>;

    /// Set or clear the expiration date of link share `id`.
    async fn set_expire_date(&self, id: &str, date: Option<NaiveDate>) -> AppResult<OcsReply>;

    /// Delete share `id`.
    async fn delete_share(&self, id: &str) -> AppResult<OcsReply>;
}
