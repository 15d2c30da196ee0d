//! Task Endpoints

use reqwest::header::CONTENT_TYPE;

use super::{ApiError, ApiResult, HttpTaskApi};
use crate::models::{CompletionPatch, NewTask, Task, TaskId};

impl HttpTaskApi {
    /// `GET /todos?_limit=N`
    pub(super) async fn fetch_tasks(&self) -> ApiResult<Vec<Task>> {
        let url = format!("{}?_limit={}", self.url("todos"), self.task_limit);
        let tasks = self.client.get(url).send().await?.json().await?;
        Ok(tasks)
    }

    /// `POST /todos`
    pub(super) async fn post_task(&self, input: &NewTask) -> ApiResult<Task> {
        let created: Task = self
            .client
            .post(self.url("todos"))
            .json(input)
            .send()
            .await?
            .json()
            .await?;
        log::debug!("[API] Created task {:?}", created);
        Ok(created)
    }

    /// `PATCH /todos/{id}` with `{"completed": ..}`.
    ///
    /// The body is consumed before the status is looked at.
    pub(super) async fn patch_completed(&self, id: TaskId, completed: bool) -> ApiResult<()> {
        let response = self
            .client
            .patch(self.url(&format!("todos/{}", id)))
            .json(&CompletionPatch { completed })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        log::debug!("[API] PATCH todo {} -> {}: {}", id, status, body);

        if !status.is_success() {
            return Err(ApiError::Rejected { status: status.as_u16() });
        }
        Ok(())
    }

    /// `DELETE /todos/{id}`; only the status is consulted.
    pub(super) async fn remove_task(&self, id: TaskId) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("todos/{}", id)))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected { status: response.status().as_u16() })
        }
    }
}
