//! Defines the HTTP routes for group information and membership.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

use super::handlers;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/groups/:id", get(handlers::info))
        .route("/groups/join", post(handlers::join))
        .route("/groups/leave", post(handlers::leave))
}
