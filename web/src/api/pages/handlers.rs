//! Handler functions serving per-page data.
//!
//! A missing session token is the logged-out rendering of a page, never an
//! error: the handler skips the backend entirely and returns the same shape
//! with null data.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use coursechat_adapters::{Group, HistoryMessage};

use crate::auth::models::Session;
use crate::auth::{service, SessionToken};
use crate::errors::GatewayError;
use crate::{utils, AppState};

/// Group listing shape shared by the courses and chats pages.
#[derive(Debug, Serialize)]
pub struct GroupsPage {
    pub groups: Option<Vec<Group>>,
}

/// Chat view payload for a single course group.
#[derive(Debug, Serialize)]
pub struct ChatPage {
    pub post: ChatPost,
}

#[derive(Debug, Default, Serialize)]
pub struct ChatPost {
    #[serde(rename = "chatHistory")]
    pub chat_history: Option<Vec<HistoryMessage>>,
    pub id: Option<i64>,
}

/// `GET /session`: layout identity, `""` when logged out.
pub async fn session(token: SessionToken) -> Json<Session> {
    let ident = token
        .0
        .as_deref()
        .and_then(service::display_ident)
        .unwrap_or_default();

    Json(Session { ident })
}

/// `GET /courses`: the courses page's group memberships.
pub async fn courses(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
) -> Result<Json<GroupsPage>, GatewayError> {
    Ok(Json(GroupsPage { groups: fetch_groups(&state, &token).await? }))
}

/// `GET /chats`: the chat overview page's group memberships.
pub async fn chats(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
) -> Result<Json<GroupsPage>, GatewayError> {
    Ok(Json(GroupsPage { groups: fetch_groups(&state, &token).await? }))
}

async fn fetch_groups(
    state: &AppState,
    token: &SessionToken,
) -> Result<Option<Vec<Group>>, GatewayError> {
    match token.0.as_deref() {
        Some(raw) => Ok(Some(state.backend.user_groups(raw).await?)),
        None => Ok(None),
    }
}

/// `GET /chats/{group_name}`: one course group's chat view.
///
/// `group_name` is a course label (`"CEN 3031"`); it resolves to a group id
/// first, then the latest page of history is fetched from now backwards.
pub async fn chat_view(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    Path(group_name): Path<String>,
) -> Result<Json<ChatPage>, GatewayError> {
    let Some(raw) = token.0.as_deref() else {
        return Ok(Json(ChatPage { post: ChatPost::default() }));
    };

    let (department, code) = utils::split_course_label(&group_name)
        .ok_or_else(|| GatewayError::BadRequest(format!("malformed course label: {group_name}")))?;

    let id = state.backend.course_group(department, code).await?;
    let history = state
        .backend
        .group_history(raw, id, state.config.history_page_size, utils::now_millis())
        .await?;

    Ok(Json(ChatPage { post: ChatPost { chat_history: Some(history), id: Some(id) } }))
}
