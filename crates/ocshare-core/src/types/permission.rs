//! Share permission bitmask.

use bitflags::bitflags;

bitflags! {
    /// Capabilities granted by a share, as transmitted by the server.
    ///
    /// `DEFAULT` is a sentinel meaning "unspecified": the server applies its
    /// own defaults, and during negotiation it means "not yet constrained".
    ///
    /// ```
    /// use ocshare_core::types::SharePermissions;
    ///
    /// let perms = SharePermissions::READ | SharePermissions::UPDATE;
    /// assert!(perms.contains(SharePermissions::READ));
    /// assert!(!perms.is_default());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SharePermissions: u32 {
        /// Read / download.
        const READ = 1;
        /// Modify existing content.
        const UPDATE = 2;
        /// Create new content (upload for link shares).
        const CREATE = 4;
        /// Delete content.
        const DELETE = 8;
        /// Re-share.
        const SHARE = 16;
        /// Unspecified.
        const DEFAULT = 1 << 30;
    }
}

impl SharePermissions {
    /// Build a mask from the integer a reply carries. Unknown bits are kept
    /// so they round-trip back to the server untouched. A value outside the
    /// 32-bit mask grants nothing.
    pub fn from_raw(raw: i64) -> Self {
        u32::try_from(raw)
            .map(Self::from_bits_retain)
            .unwrap_or_else(|_| Self::empty())
    }

    /// Whether this is exactly the `DEFAULT` sentinel.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for SharePermissions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
