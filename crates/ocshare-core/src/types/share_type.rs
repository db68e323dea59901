//! Share type codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of recipient a share is granted to.
///
/// Serialized as the integer code the server uses. Codes this client does
/// not know about are preserved in [`ShareType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ShareType {
    /// A single user on the same server.
    User,
    /// A group on the same server.
    Group,
    /// A public link.
    Link,
    /// An email recipient.
    Email,
    /// A user on another server (federated cloud id).
    Federated,
    /// Any other code.
    Other(i64),
}

impl ShareType {
    /// The integer code sent on the wire.
    pub fn code(&self) -> i64 {
        match self {
            Self::User => 0,
            Self::Group => 1,
            Self::Link => 3,
            Self::Email => 4,
            Self::Federated => 6,
            Self::Other(code) => *code,
        }
    }

    /// Return the share type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Link => "link",
            Self::Email => "email",
            Self::Federated => "federated",
            Self::Other(_) => "other",
        }
    }
}

impl From<i64> for ShareType {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::User,
            1 => Self::Group,
            3 => Self::Link,
            4 => Self::Email,
            6 => Self::Federated,
            other => Self::Other(other),
        }
    }
}

impl From<ShareType> for i64 {
    fn from(share_type: ShareType) -> Self {
        share_type.code()
    }
}

impl fmt::Display for ShareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "other({code})"),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
