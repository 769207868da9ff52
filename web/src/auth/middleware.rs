//! Session extraction for every incoming request.
//!
//! Every page load reads the `token` cookie through this extractor. Absence
//! of the cookie is never a rejection: page handlers render their logged-out
//! shape, and routes that do need a session call [`SessionToken::require`].

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use coursechat_adapters::TOKEN_COOKIE;

use crate::errors::GatewayError;

/// The raw session token, when the request carried one.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    /// The token, or `Unauthorized` for routes that cannot work without one.
    pub fn require(&self) -> Result<&str, GatewayError> {
        self.0.as_deref().ok_or(GatewayError::Unauthorized)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self(jar.get(TOKEN_COOKIE).map(|cookie| cookie.value().to_string())))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header, Request};

    use super::*;

    async fn extract(request: Request<()>) -> SessionToken {
        let (mut parts, ()) = request.into_parts();
        SessionToken::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn reads_the_token_cookie() {
        let request = Request::builder()
            .uri("/courses")
            .header(header::COOKIE, "token=abc.def.ghi; theme=dark")
            .body(())
            .unwrap();

        let token = extract(request).await;
        assert_eq!(token.0.as_deref(), Some("abc.def.ghi"));
        assert!(token.require().is_ok());
    }

    #[tokio::test]
    async fn missing_cookie_is_not_a_rejection() {
        let request = Request::builder().uri("/courses").body(()).unwrap();

        let token = extract(request).await;
        assert_eq!(token.0, None);
        assert!(matches!(token.require(), Err(GatewayError::Unauthorized)));
    }
}
