//! Handler functions for authentication-related endpoints.
//!
//! Two surfaces share the same login logic: a JSON endpoint that relays the
//! backend's status and body verbatim, and an HTML-form action that always
//! 303-redirects. Both set the session cookie only when the backend said the
//! login succeeded; logout deletes the cookie without any backend call.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::CookieJar;

use coursechat_adapters::{Credentials, Registration};

use crate::errors::GatewayError;
use crate::AppState;

use super::models::{LoginForm, RedirectTarget};
use super::service;

fn relay_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// `POST /auth/login`: JSON login passthrough.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<Response, GatewayError> {
    let relayed = state.backend.login(&credentials).await?;
    let status = relay_status(relayed.status);
    let success = relayed.is_success();

    let jar = match relayed.token {
        Some(raw) if success => {
            tracing::info!("login succeeded, issuing session cookie");
            jar.add(service::session_cookie(raw, state.config.secure_cookies))
        }
        _ => jar,
    };

    Ok((status, jar, Json(relayed.body)).into_response())
}

/// `POST /auth/logout`: drop the session cookie, nothing else.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(service::removal_cookie()), StatusCode::OK)
}

/// `POST /auth/register`: registration passthrough. No cookie is issued;
/// the user logs in afterwards.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(registration): Json<Registration>,
) -> Result<Response, GatewayError> {
    let relayed = state.backend.register(&registration).await?;
    Ok((relay_status(relayed.status), Json(relayed.body)).into_response())
}

/// `POST /login`: HTML-form login action.
///
/// Redirects to `redirectTo` (or `/`) whether or not the login worked; the
/// cookie's presence is what tells the next page load the difference.
pub async fn login_form(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(target): Query<RedirectTarget>,
    Form(form): Form<LoginForm>,
) -> Result<Response, GatewayError> {
    let credentials = Credentials { email: form.email, password: form.password };
    let relayed = state.backend.login(&credentials).await?;
    let success = relayed.is_success();

    let jar = match relayed.token {
        Some(raw) if success => jar.add(service::session_cookie(raw, state.config.secure_cookies)),
        _ => jar,
    };

    Ok((jar, Redirect::to(target.destination())).into_response())
}

/// `POST /logout`: HTML-form logout action.
pub async fn logout_form(jar: CookieJar, Query(target): Query<RedirectTarget>) -> Response {
    (jar.remove(service::removal_cookie()), Redirect::to(target.destination())).into_response()
}
