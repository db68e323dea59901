//! Share recipient value object.

use ocshare_core::types::ShareType;

/// The user, group, or address a non-link share is granted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sharee {
    /// Identifier the server knows the recipient by.
    share_with: String,
    /// Human readable name.
    display_name: String,
    /// Kind of recipient.
    share_type: ShareType,
}

impl Sharee {
    /// Create a recipient descriptor.
    pub fn new(
        share_with: impl Into<String>,
        display_name: impl Into<String>,
        share_type: ShareType,
    ) -> Self {
        Self {
            share_with: share_with.into(),
            display_name: display_name.into(),
            share_type,
        }
    }

    /// Identifier the server knows the recipient by.
    pub fn share_with(&self) -> &str {
        &self.share_with
    }

    /// Human readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Kind of recipient.
    pub fn share_type(&self) -> ShareType {
        self.share_type
    }
}
