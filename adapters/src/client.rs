//! HTTP implementation of the backend API client.
//!
//! This file contains the `Backend` trait the web layer programs against and
//! the reqwest-based `BackendClient` that implements it, including the token
//! forwarding convention (the backend reads the same `token` cookie the
//! browser holds) and the `Set-Cookie` extraction performed at login.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;

use crate::errors::ApiError;
use crate::models::{
    CourseEntry, Credentials, Group, GroupInfo, HistoryMessage, Registration, Relayed,
};

/// Name of the session cookie shared between the browser, the gateway, and
/// the backend.
pub const TOKEN_COOKIE: &str = "token";

/// Every call the gateway makes against the backend API.
///
/// Handlers depend on this trait rather than on `BackendClient` so tests can
/// substitute an in-memory backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /auth/login`. Status and body are relayed; a token is captured
    /// from the backend's `Set-Cookie` header when login succeeded.
    async fn login(&self, credentials: &Credentials) -> Result<Relayed, ApiError>;

    /// `POST /user/register`. Status and body are relayed.
    async fn register(&self, registration: &Registration) -> Result<Relayed, ApiError>;

    /// `GET /user/groups`, authenticated.
    async fn user_groups(&self, token: &str) -> Result<Vec<Group>, ApiError>;

    /// `GET /course/group/{dep}/{code}`. Resolves a course label to its chat
    /// group id, creating the group backend-side on first access.
    async fn course_group(&self, department: &str, code: &str) -> Result<i64, ApiError>;

    /// `GET /group/history/{id}?limit=&before=`, authenticated. `before` is a
    /// millisecond UTC cutoff; messages come back newest first.
    async fn group_history(
        &self,
        token: &str,
        group_id: i64,
        limit: u32,
        before: i64,
    ) -> Result<Vec<HistoryMessage>, ApiError>;

    /// `GET /course/department/{dep}`.
    async fn department_courses(&self, department: &str) -> Result<Vec<CourseEntry>, ApiError>;

    /// `GET /group/get/{id}`.
    async fn group_info(&self, group_id: i64) -> Result<GroupInfo, ApiError>;

    /// `POST /user/join`, authenticated.
    async fn join_group(&self, token: &str, group_id: i64) -> Result<(), ApiError>;

    /// `POST /user/leave`, authenticated.
    async fn leave_group(&self, token: &str, group_id: i64) -> Result<(), ApiError>;
}

/// Backend API client over a shared reqwest connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Builds a client for the API at `base_url` with one request timeout
    /// applied to every call.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn cookie_header(token: &str) -> String {
        format!("{TOKEN_COOKIE}={token}")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(url);
        if let Some(token) = token {
            request = request.header(header::COOKIE, Self::cookie_header(token));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "backend call");

        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status: status.as_u16() });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Decode { endpoint, message: err.to_string() })
    }
}

/// Pulls the session token out of a `Set-Cookie` header value.
fn token_from_set_cookie(value: &str) -> Option<String> {
    let pair = value.split(';').next()?;
    let (name, raw) = pair.split_once('=')?;

    if name.trim() == TOKEN_COOKIE && !raw.is_empty() {
        Some(raw.trim().to_string())
    } else {
        None
    }
}

/// Reads a relayable response: status, any issued token, and a lenient body.
///
/// The backend sometimes answers with an empty body (plain status replies);
/// those relay as JSON `null` rather than a decode failure.
async fn read_relayed(response: reqwest::Response) -> Result<Relayed, ApiError> {
    let status = response.status().as_u16();
    let token = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_set_cookie);

    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    Ok(Relayed { status, token, body })
}

#[async_trait]
impl Backend for BackendClient {
    async fn login(&self, credentials: &Credentials) -> Result<Relayed, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await?;

        let relayed = read_relayed(response).await?;
        tracing::debug!(status = relayed.status, issued = relayed.token.is_some(), "login relayed");

        Ok(relayed)
    }

    async fn register(&self, registration: &Registration) -> Result<Relayed, ApiError> {
        let response = self
            .http
            .post(self.url("/user/register"))
            .json(registration)
            .send()
            .await?;

        read_relayed(response).await
    }

    async fn user_groups(&self, token: &str) -> Result<Vec<Group>, ApiError> {
        self.get_json("/user/groups", self.url("/user/groups"), Some(token))
            .await
    }

    async fn course_group(&self, department: &str, code: &str) -> Result<i64, ApiError> {
        let url = self.url(&format!("/course/group/{department}/{code}"));
        self.get_json("/course/group", url, None).await
    }

    async fn group_history(
        &self,
        token: &str,
        group_id: i64,
        limit: u32,
        before: i64,
    ) -> Result<Vec<HistoryMessage>, ApiError> {
        let url = self.url(&format!("/group/history/{group_id}"));
        let request = self
            .http
            .get(url)
            .query(&[("limit", i64::from(limit)), ("before", before)])
            .header(header::COOKIE, Self::cookie_header(token));

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(endpoint = "/group/history", status = status.as_u16(), "backend call");

        if !status.is_success() {
            return Err(ApiError::Status { endpoint: "/group/history", status: status.as_u16() });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Decode { endpoint: "/group/history", message: err.to_string() })
    }

    async fn department_courses(&self, department: &str) -> Result<Vec<CourseEntry>, ApiError> {
        let url = self.url(&format!("/course/department/{department}"));
        self.get_json("/course/department", url, None).await
    }

    async fn group_info(&self, group_id: i64) -> Result<GroupInfo, ApiError> {
        let url = self.url(&format!("/group/get/{group_id}"));
        self.get_json("/group/get", url, None).await
    }

    async fn join_group(&self, token: &str, group_id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/user/join"))
            .header(header::COOKIE, Self::cookie_header(token))
            .json(&serde_json::json!({ "group_id": group_id }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint: "/user/join", status: status.as_u16() });
        }

        Ok(())
    }

    async fn leave_group(&self, token: &str, group_id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/user/leave"))
            .header(header::COOKIE, Self::cookie_header(token))
            .json(&serde_json::json!({ "group_id": group_id }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint: "/user/leave", status: status.as_u16() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_extracted_from_set_cookie() {
        let value = "token=abc.def.ghi; Path=/; Max-Age=86400; HttpOnly";
        assert_eq!(token_from_set_cookie(value), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn other_cookies_ignored() {
        assert_eq!(token_from_set_cookie("session=xyz; Path=/"), None);
        assert_eq!(token_from_set_cookie("garbage"), None);
        assert_eq!(token_from_set_cookie("token=; Path=/"), None);
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://api.local/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/user/groups"), "http://api.local/user/groups");
    }
}
