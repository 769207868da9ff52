//! Handler functions for the course catalog.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use coursechat_adapters::CourseEntry;

use crate::errors::GatewayError;
use crate::AppState;

/// `GET /courses/{dep}`: every course in a three-letter department prefix.
pub async fn department(
    State(state): State<Arc<AppState>>,
    Path(department): Path<String>,
) -> Result<Json<Vec<CourseEntry>>, GatewayError> {
    if department.len() != 3 {
        return Err(GatewayError::BadRequest(format!(
            "malformed department prefix: {department}"
        )));
    }

    Ok(Json(state.backend.department_courses(&department).await?))
}
