//! Share events published by the [`ShareManager`](super::ShareManager).

use std::fmt;
use std::sync::Arc;

use ocshare_entity::share::{AnyShare, LinkShare, Share};

/// Operation an event or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareOperation {
    /// `create_link_share`.
    CreateLinkShare,
    /// `create_share`, both phases.
    CreateShare,
    /// `fetch_shares`.
    FetchShares,
    /// `set_permissions`.
    SetPermissions,
    /// `set_name`.
    SetName,
    /// `set_password`.
    SetPassword,
    /// `set_expire_date`.
    SetExpireDate,
    /// `delete_share`.
    DeleteShare,
}

impl ShareOperation {
    /// Return the operation as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateLinkShare => "create_link_share",
            Self::CreateShare => "create_share",
            Self::FetchShares => "fetch_shares",
            Self::SetPermissions => "set_permissions",
            Self::SetName => "set_name",
            Self::SetPassword => "set_password",
            Self::SetExpireDate => "set_expire_date",
            Self::DeleteShare => "delete_share",
        }
    }
}

impl fmt::Display for ShareOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a share operation, delivered to every subscriber.
#[derive(Debug, Clone)]
pub enum ShareEvent {
    /// A user/group/email/federated share was created.
    ShareCreated(Arc<Share>),
    /// A link share was created.
    LinkShareCreated(Arc<LinkShare>),
    /// The server refused to create a link without a password.
    LinkShareRequiresPassword {
        /// Path the link was requested for.
        path: String,
        /// Message to show the user.
        message: String,
    },
    /// The shares on a path, in server order.
    SharesFetched {
        /// Path that was listed.
        path: String,
        /// Parsed shares.
        shares: Vec<AnyShare>,
    },
    /// New permissions were applied.
    PermissionsSet {
        /// The updated share.
        share: AnyShare,
    },
    /// A link share was renamed.
    NameSet {
        /// The updated link share.
        share: Arc<LinkShare>,
    },
    /// A link share password was set or cleared.
    PasswordSet {
        /// The updated link share.
        share: Arc<LinkShare>,
    },
    /// Setting a link share password failed.
    PasswordSetError {
        /// The link share that was not updated.
        share: Arc<LinkShare>,
        /// Status code the server reported.
        code: i32,
        /// Message the server reported.
        message: String,
    },
    /// A link share expiration was set or cleared.
    ExpireDateSet {
        /// The updated link share.
        share: Arc<LinkShare>,
    },
    /// A share was deleted on the server.
    ShareDeleted {
        /// The deleted share, now marked deleted.
        share: AnyShare,
    },
    /// The server rejected a request.
    ServerError {
        /// Operation that failed.
        operation: ShareOperation,
        /// Share the operation targeted, for per-share updates.
        share_id: Option<String>,
        /// Status code the server reported.
        code: i32,
        /// Message the server reported.
        message: String,
    },
    /// The server accepted a request but its reply could not be parsed.
    ParseError {
        /// Operation whose reply was malformed.
        operation: ShareOperation,
        /// What was wrong with the reply.
        message: String,
    },
}

impl ShareEvent {
    /// Short event name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShareCreated(_) => "share_created",
            Self::LinkShareCreated(_) => "link_share_created",
            Self::LinkShareRequiresPassword { .. } => "link_share_requires_password",
            Self::SharesFetched { .. } => "shares_fetched",
            Self::PermissionsSet { .. } => "permissions_set",
            Self::NameSet { .. } => "name_set",
            Self::PasswordSet { .. } => "password_set",
            Self::PasswordSetError { .. } => "password_set_error",
            Self::ExpireDateSet { .. } => "expire_date_set",
            Self::ShareDeleted { .. } => "share_deleted",
            Self::ServerError { .. } => "server_error",
            Self::ParseError { .. } => "parse_error",
        }
    }
}
