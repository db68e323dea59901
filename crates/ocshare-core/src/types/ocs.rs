//! OCS reply envelope.
//!
//! Every share endpoint answers with `{"ocs": {"meta": {...}, "data": ...}}`.
//! `data` is an object for create/update calls and an array for listings.

use serde_json::{Value, json};

use crate::result::AppResult;

static NULL: Value = Value::Null;

/// A decoded reply from a share endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct OcsReply {
    document: Value,
}

impl OcsReply {
    /// Wrap an already decoded JSON document.
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Decode a reply body.
    pub fn from_json(body: &str) -> AppResult<Self> {
        Ok(Self::new(serde_json::from_str(body)?))
    }

    /// Build a successful reply around `data`.
    pub fn ok(data: Value) -> Self {
        Self::with_status(100, "OK", data)
    }

    /// Build a reply with an explicit OCS status.
    pub fn with_status(status_code: i32, message: &str, data: Value) -> Self {
        let status = if status_code == 100 || status_code == 200 {
            "ok"
        } else {
            "failure"
        };
        Self::new(json!({
            "ocs": {
                "meta": {
                    "status": status,
                    "statuscode": status_code,
                    "message": message,
                },
                "data": data,
            }
        }))
    }

    fn meta(&self) -> &Value {
        self.document
            .get("ocs")
            .and_then(|ocs| ocs.get("meta"))
            .unwrap_or(&NULL)
    }

    /// `ocs.meta.statuscode`, if present and numeric. Codes beyond the
    /// `i32` range saturate so they never read as a success.
    pub fn status_code(&self) -> Option<i32> {
        self.meta()
            .get("statuscode")
            .and_then(Value::as_i64)
            .map(|code| {
                i32::try_from(code).unwrap_or(if code < 0 { i32::MIN } else { i32::MAX })
            })
    }

    /// `ocs.meta.message`, or an empty string.
    pub fn message(&self) -> String {
        self.meta()
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// `ocs.data`, or `null` when absent.
    pub fn data(&self) -> &Value {
        self.document
            .get("ocs")
            .and_then(|ocs| ocs.get("data"))
            .unwrap_or(&NULL)
    }

    /// `ocs.data` when it is an array; empty otherwise.
    pub fn data_array(&self) -> &[Value] {
        self.data().as_array().map(Vec::as_slice).unwrap_or(&[])
    }
}
