//! Wire models for the `adapters` crate.
//!
//! These models mirror the JSON the backend API produces and consumes, so the
//! web layer can work with typed data instead of raw `serde_json` values. The
//! serde renames pin the backend's field names where they differ from ours.

use serde::{Deserialize, Serialize};

/// A chat group the user belongs to, as listed by `/user/groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "group_id")]
    pub id: i64,
    pub name: String,
}

/// Full group record from `/group/get/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// One message from `/group/history/{id}`, newest first.
///
/// `iat` is the issue time in milliseconds since the UTC epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMessage {
    #[serde(rename = "message_id")]
    pub id: i64,
    pub user_ident: String,
    pub contents: String,
    pub iat: i64,
}

/// A catalog entry from `/course/department/{dep}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Course label, e.g. `"CEN 3031"`.
    pub label: String,
    /// Human-readable course title.
    pub name: String,
}

/// Login credentials forwarded verbatim to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New-account payload forwarded to `/user/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

/// An upstream response relayed to the browser without interpretation.
///
/// Login and registration forward whatever status and body the backend
/// produced; `token` carries the session token when the backend issued one
/// through its `Set-Cookie` header.
#[derive(Debug, Clone)]
pub struct Relayed {
    pub status: u16,
    pub token: Option<String>,
    pub body: serde_json::Value,
}

impl Relayed {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
