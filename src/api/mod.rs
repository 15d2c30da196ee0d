//! Remote Task Service Client
//!
//! Thin async wrappers over the service's REST endpoints, organized by
//! collection. Every call returns an explicit [`ApiResult`]; nothing retries
//! and no timeout is set beyond the transport default.

mod task;
mod user;


use async_trait::async_trait;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{NewTask, Task, TaskId, User};

/// Message shown for every rejected update or delete
pub const REJECTED_MESSAGE: &str = "Failed server connect! Please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a body that did not decode
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a non-success status
    #[error("{}", REJECTED_MESSAGE)]
    Rejected { status: u16 },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the controller needs from the remote service.
///
/// Browser fetch futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    async fn list_users(&self) -> ApiResult<Vec<User>>;

    /// Returns the task as echoed by the service, with its assigned id
    async fn create_task(&self, input: &NewTask) -> ApiResult<Task>;

    async fn set_task_completed(&self, id: TaskId, completed: bool) -> ApiResult<()>;

    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;
}

/// `TaskApi` over HTTP with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    base_url: String,
    task_limit: usize,
}

impl HttpTaskApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            task_limit: config.task_limit,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.fetch_tasks().await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.fetch_users().await
    }

    async fn create_task(&self, input: &NewTask) -> ApiResult<Task> {
        self.post_task(input).await
    }

    async fn set_task_completed(&self, id: TaskId, completed: bool) -> ApiResult<()> {
        self.patch_completed(id, completed).await
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.remove_task(id).await
    }
}
