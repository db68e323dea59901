//! Turns share reply payloads into entities.
//!
//! The server has changed its representation over time: link URLs used a
//! different scheme before 8.0.0 and were not sent at all before 8.2, ids
//! used to be integers, and "has a password" is signalled by `share_with`
//! being a string. Everything version dependent is resolved here, as pure
//! functions of the payload, the server version and the base URL.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use url::Url;

use ocshare_core::error::AppError;
use ocshare_core::result::AppResult;
use ocshare_core::types::{ServerVersion, SharePermissions, ShareType};
use ocshare_entity::account::Account;
use ocshare_entity::share::{AnyShare, LinkShare, NewLinkShare, Share, Sharee};

/// First server version that serves links under `index.php/s/<token>`.
pub const SHORT_LINK_VERSION: ServerVersion = ServerVersion::new(8, 0, 0);

/// Layout of the `expiration` field.
const EXPIRATION_FORMAT: &str = "%Y-%m-%d 00:00:00";

/// Parse a link share (`share_type == 3`) payload.
pub fn parse_link_share(account: &Arc<Account>, data: &Value) -> AppResult<LinkShare> {
    let object = expect_object(data)?;
    let (id, path) = identity(object)?;

    let url = resolve_link_url(object, account.server_version(), account.url());

    Ok(LinkShare::new(
        Arc::clone(account),
        NewLinkShare {
            id,
            path,
            name: str_field(object, "name"),
            token: str_field(object, "token"),
            permissions: SharePermissions::from_raw(int_field(object, "permissions")),
            password_set: object.get("share_with").is_some_and(Value::is_string),
            url,
            expire_date: parse_expire_date(object.get("expiration")),
        },
    ))
}

/// Parse a user, group, email or federated share payload.
pub fn parse_share(account: &Arc<Account>, data: &Value) -> AppResult<Share> {
    let object = expect_object(data)?;
    let (id, path) = identity(object)?;
    let share_type = ShareType::from(int_field(object, "share_type"));

    let sharee = Sharee::new(
        str_field(object, "share_with"),
        str_field(object, "share_with_displayname"),
        share_type,
    );

    Ok(Share::new(
        Arc::clone(account),
        id,
        path,
        share_type,
        SharePermissions::from_raw(int_field(object, "permissions")),
        Some(sharee),
    ))
}

/// Parse one element of a share listing, picking the parser by `share_type`.
pub fn parse_any_share(account: &Arc<Account>, data: &Value) -> AppResult<AnyShare> {
    let share_type = data
        .as_object()
        .map(|object| ShareType::from(int_field(object, "share_type")))
        .unwrap_or(ShareType::User);

    if share_type == ShareType::Link {
        Ok(AnyShare::Link(Arc::new(parse_link_share(account, data)?)))
    } else {
        Ok(AnyShare::Share(Arc::new(parse_share(account, data)?)))
    }
}

/// Decide the public URL of a link share.
///
/// In order: the payload's own `url`, kept verbatim; on servers from
/// [`SHORT_LINK_VERSION`] on, `<base>/index.php/s/<token>`; otherwise the
/// legacy `<base>/public.php?service=files&t=<token>`. A `null` url counts
/// as absent.
pub fn resolve_link_url(
    data: &Map<String, Value>,
    server_version: ServerVersion,
    base_url: &Url,
) -> String {
    match data.get("url") {
        Some(Value::String(explicit)) => return explicit.clone(),
        Some(Value::Null) | None => {}
        Some(other) => return other.to_string(),
    }

    let token = str_field(data, "token");
    if server_version >= SHORT_LINK_VERSION {
        concat_url_path(base_url, &format!("index.php/s/{token}")).into()
    } else {
        let mut url = concat_url_path(base_url, "public.php");
        url.query_pairs_mut()
            .append_pair("service", "files")
            .append_pair("t", &token);
        url.into()
    }
}

/// Parse the `expiration` field. Anything but a `yyyy-MM-dd 00:00:00`
/// string yields no date.
pub fn parse_expire_date(value: Option<&Value>) -> Option<NaiveDate> {
    value
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, EXPIRATION_FORMAT).ok())
}

/// Canonical string form of an id the server sent as a string or a number.
pub fn normalize_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.fract() == 0.0 {
                        format!("{}", f as i64)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

/// Integer field, accepting numeric strings; `0` when absent.
pub(crate) fn int_field(data: &Map<String, Value>, key: &str) -> i64 {
    match data.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

/// String field; empty when absent or not a string.
fn str_field(data: &Map<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn expect_object(data: &Value) -> AppResult<&Map<String, Value>> {
    data.as_object()
        .ok_or_else(|| AppError::parse(format!("Expected a share object, got: {data}")))
}

fn identity(object: &Map<String, Value>) -> AppResult<(String, String)> {
    let id = normalize_id(object.get("id"))
        .ok_or_else(|| AppError::parse("Share reply is missing 'id'"))?;
    let path = object
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::parse(format!("Share {id} is missing 'path'")))?
        .to_string();
    Ok((id, path))
}

/// Join `concat` onto the path of `base` with exactly one `/` between them.
fn concat_url_path(base: &Url, concat: &str) -> Url {
    let mut url = base.clone();
    let path = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        concat.trim_start_matches('/')
    );
    url.set_path(&path);
    url.set_query(None);
    url
}
