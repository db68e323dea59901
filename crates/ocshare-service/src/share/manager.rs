//! Share manager: issues share requests and publishes their outcomes.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use ocshare_core::error::AppError;
use ocshare_core::result::AppResult;
use ocshare_core::traits::ShareJob;
use ocshare_core::types::{OcsReply, SharePermissions, ShareType};
use ocshare_entity::account::Account;
use ocshare_entity::share::{AnyShare, LinkShare};

use super::bus::EventBus;
use super::event::{ShareEvent, ShareOperation};
use super::negotiator::{existing_permissions, negotiate_permissions};
use super::parser::{parse_any_share, parse_expire_date, parse_link_share, parse_share};
use crate::sync::InvalidationNotifier;

/// Status the server answers a link creation with when a password is
/// mandatory.
const PASSWORD_REQUIRED: i32 = 403;

/// Manages the shares of one account.
///
/// Every operation runs as its own task and returns immediately; outcomes
/// arrive as [`ShareEvent`]s on the queues returned by
/// [`ShareManager::subscribe`]. Cloning is cheap and clones share the
/// subscribers.
#[derive(Debug, Clone)]
pub struct ShareManager {
    /// Session the shares belong to.
    account: Arc<Account>,
    /// Request execution collaborator.
    job: Arc<dyn ShareJob>,
    /// Sync root invalidation after create/delete.
    notifier: InvalidationNotifier,
    /// Event fan-out.
    events: Arc<EventBus>,
}

impl ShareManager {
    /// Creates a new share manager.
    pub fn new(
        account: Arc<Account>,
        job: Arc<dyn ShareJob>,
        notifier: InvalidationNotifier,
    ) -> Self {
        Self {
            account,
            job,
            notifier,
            events: Arc::new(EventBus::new()),
        }
    }

    /// Receive every event emitted from now on, without loss.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ShareEvent> {
        self.events.subscribe()
    }

    /// The account shares are managed for.
    pub fn account(&self) -> &Arc<Account> {
        &self.account
    }

    /// Create a public link share of `path`. An empty `password` creates
    /// an unprotected link.
    ///
    /// Emits `LinkShareCreated`, or `LinkShareRequiresPassword` when the
    /// server insists on a password.
    pub fn create_link_share(
        &self,
        path: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> JoinHandle<()> {
        let this = self.clone();
        let (path, name, password) = (path.into(), name.into(), password.into());
        tokio::spawn(async move { this.run_create_link_share(path, name, password).await })
    }

    /// Share `path` with `share_with`, never granting more than the
    /// acting principal was granted itself.
    ///
    /// Emits `ShareCreated`.
    pub fn create_share(
        &self,
        path: impl Into<String>,
        share_type: ShareType,
        share_with: impl Into<String>,
        desired: SharePermissions,
    ) -> JoinHandle<()> {
        let this = self.clone();
        let (path, share_with) = (path.into(), share_with.into());
        tokio::spawn(async move {
            this.run_create_share(path, share_type, share_with, desired)
                .await
        })
    }

    /// List the shares on `path`.
    ///
    /// Emits `SharesFetched` with the shares in server order.
    pub fn fetch_shares(&self, path: impl Into<String>) -> JoinHandle<()> {
        let this = self.clone();
        let path = path.into();
        tokio::spawn(async move { this.run_fetch_shares(path).await })
    }

    /// Change the permissions of a share. Emits `PermissionsSet`.
    pub fn set_permissions(
        &self,
        share: impl Into<AnyShare>,
        permissions: SharePermissions,
    ) -> JoinHandle<()> {
        let this = self.clone();
        let share = share.into();
        tokio::spawn(async move { this.run_set_permissions(share, permissions).await })
    }

    /// Delete a share. Emits `ShareDeleted`.
    pub fn delete_share(&self, share: impl Into<AnyShare>) -> JoinHandle<()> {
        let this = self.clone();
        let share = share.into();
        tokio::spawn(async move { this.run_delete_share(share).await })
    }

    /// Rename a link share. Emits `NameSet`.
    pub fn set_name(&self, share: &Arc<LinkShare>, name: impl Into<String>) -> JoinHandle<()> {
        let this = self.clone();
        let (share, name) = (Arc::clone(share), name.into());
        tokio::spawn(async move { this.run_set_name(share, name).await })
    }

    /// Set, or clear with an empty string, a link share password.
    /// Emits `PasswordSet` or `PasswordSetError`.
    pub fn set_password(
        &self,
        share: &Arc<LinkShare>,
        password: impl Into<String>,
    ) -> JoinHandle<()> {
        let this = self.clone();
        let (share, password) = (Arc::clone(share), password.into());
        tokio::spawn(async move { this.run_set_password(share, password).await })
    }

    /// Set or clear a link share expiration. Emits `ExpireDateSet`.
    pub fn set_expire_date(
        &self,
        share: &Arc<LinkShare>,
        date: Option<NaiveDate>,
    ) -> JoinHandle<()> {
        let this = self.clone();
        let share = Arc::clone(share);
        tokio::spawn(async move { this.run_set_expire_date(share, date).await })
    }

    async fn run_create_link_share(&self, path: String, name: String, password: String) {
        let operation = ShareOperation::CreateLinkShare;
        let reply = match accepted(self.job.create_link_share(&path, &name, &password).await) {
            Ok(reply) => reply,
            Err(e) if e.code() == PASSWORD_REQUIRED => {
                let e = AppError::password_required(e.message);
                warn!(path = %path, error = %e, "Link share requires a password");
                self.emit(ShareEvent::LinkShareRequiresPassword {
                    path,
                    message: e.message,
                });
                return;
            }
            Err(e) => return self.server_error(operation, None, e),
        };

        let share = match parse_link_share(&self.account, reply.data()) {
            Ok(share) => Arc::new(share),
            Err(e) => return self.parse_error(operation, e),
        };

        info!(share_id = %share.id(), path = %share.path(), link = %share.link(), "Link share created");
        self.emit(ShareEvent::LinkShareCreated(Arc::clone(&share)));
        self.notifier.notify(&self.account, share.path()).await;
    }

    async fn run_create_share(
        &self,
        path: String,
        share_type: ShareType,
        share_with: String,
        desired: SharePermissions,
    ) {
        let operation = ShareOperation::CreateShare;

        // Nothing stops the grant from changing between the two requests.
        let shared_with_me = match accepted(self.job.get_shared_with_me().await) {
            Ok(reply) => reply,
            Err(e) => return self.server_error(operation, None, e),
        };
        let existing = existing_permissions(shared_with_me.data_array(), &path);
        let permissions = negotiate_permissions(desired, existing);
        debug!(
            path = %path,
            desired = desired.bits(),
            existing = existing.bits(),
            granted = permissions.bits(),
            "Share permissions negotiated"
        );

        let reply = match accepted(
            self.job
                .create_share(&path, share_type, &share_with, permissions)
                .await,
        ) {
            Ok(reply) => reply,
            Err(e) => return self.server_error(operation, None, e),
        };

        let share = match parse_share(&self.account, reply.data()) {
            Ok(share) => Arc::new(share),
            Err(e) => return self.parse_error(operation, e),
        };

        info!(
            share_id = %share.id(),
            path = %share.path(),
            share_type = %share.share_type(),
            share_with = %share_with,
            "Share created"
        );
        self.emit(ShareEvent::ShareCreated(Arc::clone(&share)));
        self.notifier.notify(&self.account, share.path()).await;
    }

    async fn run_fetch_shares(&self, path: String) {
        let operation = ShareOperation::FetchShares;
        let reply = match accepted(self.job.get_shares(&path).await) {
            Ok(reply) => reply,
            Err(e) => return self.server_error(operation, None, e),
        };

        let Some(listing) = reply.data().as_array() else {
            let e = AppError::parse(format!(
                "Expected a share list for '{path}', got: {}",
                reply.data()
            ));
            return self.parse_error(operation, e);
        };

        let shares = match listing
            .iter()
            .map(|data| parse_any_share(&self.account, data))
            .collect::<AppResult<Vec<_>>>()
        {
            Ok(shares) => shares,
            Err(e) => return self.parse_error(operation, e),
        };

        debug!(path = %path, count = shares.len(), "Shares fetched");
        self.emit(ShareEvent::SharesFetched { path, shares });
    }

    async fn run_set_permissions(&self, share: AnyShare, permissions: SharePermissions) {
        let result = self.job.set_permissions(share.id(), permissions).await;
        if let Err(e) = accepted(result) {
            return self.server_error(
                ShareOperation::SetPermissions,
                Some(share.id().to_string()),
                e,
            );
        }

        share.base().apply_permissions(permissions);
        debug!(share_id = %share.id(), permissions = permissions.bits(), "Share permissions set");
        self.emit(ShareEvent::PermissionsSet { share });
    }

    async fn run_delete_share(&self, share: AnyShare) {
        if let Err(e) = accepted(self.job.delete_share(share.id()).await) {
            return self.server_error(
                ShareOperation::DeleteShare,
                Some(share.id().to_string()),
                e,
            );
        }

        share.base().mark_deleted();
        info!(share_id = %share.id(), path = %share.path(), "Share deleted");
        let path = share.path().to_string();
        self.emit(ShareEvent::ShareDeleted { share });
        self.notifier.notify(&self.account, &path).await;
    }

    async fn run_set_name(&self, share: Arc<LinkShare>, name: String) {
        if let Err(e) = accepted(self.job.set_name(share.id(), &name).await) {
            return self.server_error(ShareOperation::SetName, Some(share.id().to_string()), e);
        }

        share.apply_name(name);
        debug!(share_id = %share.id(), "Link share renamed");
        self.emit(ShareEvent::NameSet { share });
    }

    async fn run_set_password(&self, share: Arc<LinkShare>, password: String) {
        if let Err(e) = accepted(self.job.set_password(share.id(), &password).await) {
            let e = AppError::password_update(e.code(), e.message);
            warn!(share_id = %share.id(), error = %e, "Failed to set link share password");
            self.emit(ShareEvent::PasswordSetError {
                share,
                code: e.code(),
                message: e.message,
            });
            return;
        }

        share.apply_password_set(!password.is_empty());
        debug!(share_id = %share.id(), password_set = share.is_password_set(), "Link share password set");
        self.emit(ShareEvent::PasswordSet { share });
    }

    async fn run_set_expire_date(&self, share: Arc<LinkShare>, date: Option<NaiveDate>) {
        let reply = match accepted(self.job.set_expire_date(share.id(), date).await) {
            Ok(reply) => reply,
            Err(e) => {
                return self.server_error(
                    ShareOperation::SetExpireDate,
                    Some(share.id().to_string()),
                    e,
                );
            }
        };

        // The server may normalize the date; its answer wins when it sends one.
        let expire_date = match reply.data().get("expiration") {
            Some(value) if value.is_string() => parse_expire_date(Some(value)),
            _ => date,
        };
        share.apply_expire_date(expire_date);
        debug!(share_id = %share.id(), expire_date = ?expire_date, "Link share expiration set");
        self.emit(ShareEvent::ExpireDateSet { share });
    }

    fn server_error(&self, operation: ShareOperation, share_id: Option<String>, error: AppError) {
        warn!(
            operation = %operation,
            share_id = ?share_id,
            code = error.code(),
            error = %error,
            "Share request failed"
        );
        self.emit(ShareEvent::ServerError {
            operation,
            share_id,
            code: error.code(),
            message: error.message,
        });
    }

    fn parse_error(&self, operation: ShareOperation, error: AppError) {
        warn!(operation = %operation, error = %error, "Malformed share reply");
        self.emit(ShareEvent::ParseError {
            operation,
            message: error.message,
        });
    }

    fn emit(&self, event: ShareEvent) {
        let name = event.name();
        if self.events.publish(event) == 0 {
            debug!(event = name, "No subscriber for share event");
        }
    }
}

/// Treat a reply whose OCS status is not a success code as a failure.
fn accepted(result: AppResult<OcsReply>) -> AppResult<OcsReply> {
    let reply = result?;
    match reply.status_code() {
        Some(code) if code != 100 && code != 200 => {
            Err(AppError::transport(code, reply.message()))
        }
        _ => Ok(reply),
    }
}
