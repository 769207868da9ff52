//! Handler functions for group information and membership.
//!
//! Join and leave are authenticated passthroughs; a request without a session
//! cookie is refused here rather than bounced off the backend.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use coursechat_adapters::GroupInfo;

use crate::auth::SessionToken;
use crate::errors::GatewayError;
use crate::AppState;

/// Body of the join/leave actions.
#[derive(Debug, Deserialize)]
pub struct GroupRef {
    pub group_id: i64,
}

/// `GET /groups/{id}`: group name and description.
pub async fn info(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<GroupInfo>, GatewayError> {
    Ok(Json(state.backend.group_info(id).await?))
}

/// `POST /groups/join`.
pub async fn join(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    Json(body): Json<GroupRef>,
) -> Result<StatusCode, GatewayError> {
    state.backend.join_group(token.require()?, body.group_id).await?;
    Ok(StatusCode::OK)
}

/// `POST /groups/leave`.
pub async fn leave(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    Json(body): Json<GroupRef>,
) -> Result<StatusCode, GatewayError> {
    state.backend.leave_group(token.require()?, body.group_id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use crate::testing::{state_and_fake, state_with, FakeBackend};

    use super::*;

    #[tokio::test]
    async fn join_requires_a_session() {
        let state = state_with(FakeBackend::default());

        let result = join(State(state), SessionToken(None), Json(GroupRef { group_id: 3 })).await;
        assert!(matches!(result, Err(GatewayError::Unauthorized)));
    }

    #[tokio::test]
    async fn join_and_leave_forward_the_group_id() {
        let (state, fake) = state_and_fake(FakeBackend::default());

        join(State(state.clone()), SessionToken(Some("tok".into())), Json(GroupRef { group_id: 3 }))
            .await
            .unwrap();
        leave(State(state), SessionToken(Some("tok".into())), Json(GroupRef { group_id: 3 }))
            .await
            .unwrap();

        let calls = fake.group_calls.lock().unwrap();
        assert_eq!(*calls, vec!["join:3".to_string(), "leave:3".to_string()]);
    }

    #[tokio::test]
    async fn info_passes_the_record_through() {
        let record = GroupInfo { id: 5, name: "CEN 3031".into(), description: "Intro".into() };
        let state = state_with(FakeBackend { group_info: Some(record.clone()), ..FakeBackend::default() });

        let reply = info(State(state), Path(5)).await.unwrap();
        assert_eq!(reply.0, record);
    }
}
