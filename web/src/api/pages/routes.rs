//! Defines the HTTP routes for per-page data.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::AppState;

use super::handlers;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", get(handlers::session))
        .route("/courses", get(handlers::courses))
        .route("/chats", get(handlers::chats))
        .route("/chats/:group_name", get(handlers::chat_view))
}
