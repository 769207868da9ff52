//! In-memory backend double shared by handler tests.

use std::sync::{Arc, Mutex};

use axum::async_trait;

use coursechat_adapters::{
    ApiError, Backend, CourseEntry, Credentials, Group, GroupInfo, HistoryMessage, Registration,
    Relayed,
};

use crate::config::AppConfig;
use crate::AppState;

/// Arguments of one recorded `group_history` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCall {
    pub token: String,
    pub group_id: i64,
    pub limit: u32,
    pub before: i64,
}

/// Canned-response `Backend` that records the calls it receives.
///
/// Setting `fail_status` makes every call fail, which doubles as proof that a
/// handler never reached the backend.
#[derive(Default)]
pub struct FakeBackend {
    pub login_reply: Option<Relayed>,
    pub groups: Vec<Group>,
    pub course_id: i64,
    pub history: Vec<HistoryMessage>,
    pub courses: Vec<CourseEntry>,
    pub group_info: Option<GroupInfo>,
    pub fail_status: Option<u16>,
    pub history_calls: Mutex<Vec<HistoryCall>>,
    pub group_calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn fail(&self) -> Result<(), ApiError> {
        match self.fail_status {
            Some(status) => Err(ApiError::Status { endpoint: "fake", status }),
            None => Ok(()),
        }
    }

    fn relayed(&self) -> Relayed {
        self.login_reply
            .clone()
            .unwrap_or(Relayed { status: 200, token: None, body: serde_json::Value::Null })
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<Relayed, ApiError> {
        self.fail()?;
        Ok(self.relayed())
    }

    async fn register(&self, _registration: &Registration) -> Result<Relayed, ApiError> {
        self.fail()?;
        Ok(self.relayed())
    }

    async fn user_groups(&self, _token: &str) -> Result<Vec<Group>, ApiError> {
        self.fail()?;
        Ok(self.groups.clone())
    }

    async fn course_group(&self, _department: &str, _code: &str) -> Result<i64, ApiError> {
        self.fail()?;
        Ok(self.course_id)
    }

    async fn group_history(
        &self,
        token: &str,
        group_id: i64,
        limit: u32,
        before: i64,
    ) -> Result<Vec<HistoryMessage>, ApiError> {
        self.fail()?;
        self.history_calls.lock().unwrap().push(HistoryCall {
            token: token.to_string(),
            group_id,
            limit,
            before,
        });
        Ok(self.history.clone())
    }

    async fn department_courses(&self, _department: &str) -> Result<Vec<CourseEntry>, ApiError> {
        self.fail()?;
        Ok(self.courses.clone())
    }

    async fn group_info(&self, group_id: i64) -> Result<GroupInfo, ApiError> {
        self.fail()?;
        self.group_info
            .clone()
            .ok_or(ApiError::Status { endpoint: "fake", status: 404 })
            .map(|mut record| {
                record.id = group_id;
                record
            })
    }

    async fn join_group(&self, _token: &str, group_id: i64) -> Result<(), ApiError> {
        self.fail()?;
        self.group_calls.lock().unwrap().push(format!("join:{group_id}"));
        Ok(())
    }

    async fn leave_group(&self, _token: &str, group_id: i64) -> Result<(), ApiError> {
        self.fail()?;
        self.group_calls.lock().unwrap().push(format!("leave:{group_id}"));
        Ok(())
    }
}

pub fn state_and_fake(backend: FakeBackend) -> (Arc<AppState>, Arc<FakeBackend>) {
    let fake = Arc::new(backend);
    let state = Arc::new(AppState { config: AppConfig::default(), backend: fake.clone() });
    (state, fake)
}

pub fn state_with(backend: FakeBackend) -> Arc<AppState> {
    state_and_fake(backend).0
}
