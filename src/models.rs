//! Frontend Models
//!
//! Data structures matching the remote task service's JSON.

use serde::{Deserialize, Serialize};

pub type TaskId = u32;
pub type UserId = u32;

/// Task as returned by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// User (extra fields sent by the service are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// POST body for a new task. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

impl NewTask {
    /// Build from the raw form values.
    ///
    /// The user select yields a string; anything that does not parse as an id
    /// becomes `0`, the same as a numeric coercion of an empty field.
    pub fn from_form(user_value: &str, title: impl Into<String>) -> Self {
        Self {
            user_id: user_value.trim().parse().unwrap_or(0),
            title: title.into(),
            completed: false,
        }
    }
}

/// PATCH body for toggling completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionPatch {
    pub completed: bool,
}
