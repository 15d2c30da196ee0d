//! User Endpoints

use super::{ApiResult, HttpTaskApi};
use crate::models::User;

impl HttpTaskApi {
    /// `GET /users`
    pub(super) async fn fetch_users(&self) -> ApiResult<Vec<User>> {
        let users = self.client.get(self.url("users")).send().await?.json().await?;
        Ok(users)
    }
}
