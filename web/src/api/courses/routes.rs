//! Defines the HTTP routes for the course catalog.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::AppState;

use super::handlers;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/courses/:dep", get(handlers::department))
}
