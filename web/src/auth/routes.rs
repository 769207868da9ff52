//! Defines the HTTP routes specifically for authentication.
//!
//! Both the JSON endpoints under `/auth` and the HTML-form actions the login
//! and logout pages post to.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use crate::AppState;

use super::handlers;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/register", post(handlers::register))
        .route("/login", post(handlers::login_form))
        .route("/logout", post(handlers::logout_form))
}
