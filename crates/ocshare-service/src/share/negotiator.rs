//! Permission negotiation for re-shares.
//!
//! A principal must never hand out more than it was given. Before creating
//! a share the manager looks up what the item was shared with the acting
//! principal and clamps the requested permissions to that.

use serde_json::Value;

use ocshare_core::types::SharePermissions;

use super::parser::int_field;

/// Permissions the acting principal holds on `path`, taken from a
/// "shared with me" listing. `DEFAULT` when the item was not shared with it.
///
/// When several entries target the same path the last one wins.
pub fn existing_permissions(shared_with_me: &[Value], path: &str) -> SharePermissions {
    shared_with_me
        .iter()
        .rev()
        .filter_map(Value::as_object)
        .find(|entry| entry.get("file_target").and_then(Value::as_str) == Some(path))
        .map(|entry| SharePermissions::from_raw(int_field(entry, "permissions")))
        .unwrap_or(SharePermissions::DEFAULT)
}

/// Permissions to request for a new share.
///
/// `DEFAULT` as `desired` inherits `existing`; any constrained `existing`
/// is intersected with the result.
pub fn negotiate_permissions(
    desired: SharePermissions,
    existing: SharePermissions,
) -> SharePermissions {
    let mut valid = if desired.is_default() {
        existing
    } else {
        desired
    };
    if !existing.is_default() {
        valid &= existing;
    }
    valid
}
