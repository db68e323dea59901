//! Either kind of share behind one handle.

use std::sync::Arc;

use ocshare_core::types::{SharePermissions, ShareType};

use super::link::LinkShare;
use super::model::Share;

/// A fetched share: a plain [`Share`] or a [`LinkShare`].
#[derive(Debug, Clone)]
pub enum AnyShare {
    /// User, group, email or federated share.
    Share(Arc<Share>),
    /// Public link share.
    Link(Arc<LinkShare>),
}

impl AnyShare {
    /// The generic share part.
    pub fn base(&self) -> &Share {
        match self {
            Self::Share(share) => share.as_ref(),
            Self::Link(link) => link.share(),
        }
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> &str {
        self.base().id()
    }

    /// Absolute remote path.
    pub fn path(&self) -> &str {
        self.base().path()
    }

    /// Kind of recipient.
    pub fn share_type(&self) -> ShareType {
        self.base().share_type()
    }

    /// Currently known permissions.
    pub fn permissions(&self) -> SharePermissions {
        self.base().permissions()
    }

    /// Whether this is a link share.
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    /// The link share, if this is one.
    pub fn as_link(&self) -> Option<&Arc<LinkShare>> {
        match self {
            Self::Link(link) => Some(link),
            Self::Share(_) => None,
        }
    }

    /// The plain share, if this is one.
    pub fn as_share(&self) -> Option<&Arc<Share>> {
        match self {
            Self::Share(share) => Some(share),
            Self::Link(_) => None,
        }
    }
}

impl From<Arc<Share>> for AnyShare {
    fn from(share: Arc<Share>) -> Self {
        Self::Share(share)
    }
}

impl From<Arc<LinkShare>> for AnyShare {
    fn from(link: Arc<LinkShare>) -> Self {
        Self::Link(link)
    }
}
