//! Scripted [`ShareJob`] for tests and demos.
//!
//! Replies are queued per method and handed out in order; a method with
//! nothing queued answers with an empty successful reply. Every call is
//! recorded with its arguments.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use ocshare_core::result::AppResult;
use ocshare_core::traits::ShareJob;
use ocshare_core::types::{OcsReply, SharePermissions, ShareType};

/// One recorded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobCall {
    /// `get_shares`.
    GetShares {
        /// Listed path.
        path: String,
    },
    /// `get_shared_with_me`.
    GetSharedWithMe,
    /// `create_share`.
    CreateShare {
        /// Shared path.
        path: String,
        /// Kind of recipient.
        share_type: ShareType,
        /// Recipient.
        share_with: String,
        /// Permissions sent, after negotiation.
        permissions: SharePermissions,
    },
    /// `create_link_share`.
    CreateLinkShare {
        /// Shared path.
        path: String,
        /// Link label.
        name: String,
        /// Password, empty for none.
        password: String,
    },
    /// `set_permissions`.
    SetPermissions {
        /// Target share.
        id: String,
        /// Requested permissions.
        permissions: SharePermissions,
    },
    /// `set_name`.
    SetName {
        /// Target link share.
        id: String,
        /// Requested label.
        name: String,
    },
    /// `set_password`.
    SetPassword {
        /// Target link share.
        id: String,
        /// Requested password, empty to clear.
        password: String,
    },
    /// `set_expire_date`.
    SetExpireDate {
        /// Target link share.
        id: String,
        /// Requested expiration, `None` to clear.
        date: Option<NaiveDate>,
    },
    /// `delete_share`.
    DeleteShare {
        /// Target share.
        id: String,
    },
}

impl JobCall {
    /// Name of the [`ShareJob`] method this call went to.
    pub fn method(&self) -> &'static str {
        match self {
            Self::GetShares { .. } => "get_shares",
            Self::GetSharedWithMe => "get_shared_with_me",
            Self::CreateShare { .. } => "create_share",
            Self::CreateLinkShare { .. } => "create_link_share",
            Self::SetPermissions { .. } => "set_permissions",
            Self::SetName { .. } => "set_name",
            Self::SetPassword { .. } => "set_password",
            Self::SetExpireDate { .. } => "set_expire_date",
            Self::DeleteShare { .. } => "delete_share",
        }
    }
}

/// In-memory [`ShareJob`] answering from a script.
#[derive(Debug, Default)]
pub struct MockShareJob {
    replies: Mutex<HashMap<&'static str, VecDeque<AppResult<OcsReply>>>>,
    calls: Mutex<Vec<JobCall>>,
}

impl MockShareJob {
    /// Create a job with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `reply` for the next call to `method`.
    pub fn push_reply(&self, method: &'static str, reply: AppResult<OcsReply>) {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(method)
            .or_default()
            .push_back(reply);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<JobCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn answer(&self, call: JobCall) -> AppResult<OcsReply> {
        let method = call.method();
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);

        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(OcsReply::ok(Value::Null)))
    }
}

#[async_trait]
impl ShareJob for MockShareJob {
    async fn get_shares(&self, path: &str) -> AppResult<OcsReply> {
        self.answer(JobCall::GetShares {
            path: path.to_string(),
        })
    }

    async fn get_shared_with_me(&self) -> AppResult<OcsReply> {
        self.answer(JobCall::GetSharedWithMe)
    }

    async fn create_share(
        &self,
        path: &str,
        share_type: ShareType,
        share_with: &str,
        permissions: SharePermissions,
    ) -> AppResult<OcsReply> {
        self.answer(JobCall::CreateShare {
            path: path.to_string(),
            share_type,
            share_with: share_with.to_string(),
            permissions,
        })
    }

    async fn create_link_share(
        &self,
        path: &str,
        name: &str,
        password: &str,
    ) -> AppResult<OcsReply> {
        self.answer(JobCall::CreateLinkShare {
            path: path.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        })
    }

    async fn set_permissions(
        &self,
        id: &str,
        permissions: SharePermissions,
    ) -> AppResult<OcsReply> {
        self.answer(JobCall::SetPermissions {
            id: id.to_string(),
            permissions,
        })
    }

    async fn set_name(&self, id: &str, name: &str) -> AppResult<OcsReply> {
        self.answer(JobCall::SetName {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    async fn set_password(&self, id: &str, password: &str) -> AppResult<OcsReply> {
        self.answer(JobCall::SetPassword {
            id: id.to_string(),
            password: password.to_string(),
        })
    }

    async fn set_expire_date(&self, id: &str, date: Option<NaiveDate>) -> AppResult<OcsReply> {
        self.answer(JobCall::SetExpireDate {
            id: id.to_string(),
            date,
        })
    }

    async fn delete_share(&self, id: &str) -> AppResult<OcsReply> {
        self.answer(JobCall::DeleteShare { id: id.to_string() })
    }
}
