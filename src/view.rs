//! View Models
//!
//! Pure derivations from `AppState` to what the list and the form show.

use crate::models::{TaskId, User, UserId};
use crate::store::{EntryKey, TaskEntry};

/// Shown when a task's owner is not among the loaded users
pub const UNKNOWN_USER: &str = "Unknown user";

/// One rendered list entry
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    /// Unique per entry, used as the list key
    pub key: EntryKey,
    /// Server id, used for requests (not necessarily unique)
    pub id: TaskId,
    pub title: String,
    pub owner: String,
    pub completed: bool,
}

/// One entry of the user select
#[derive(Debug, Clone, PartialEq)]
pub struct UserOption {
    pub value: String,
    pub label: String,
}

pub fn owner_name(users: &[User], user_id: UserId) -> Option<&str> {
    users.iter().find(|u| u.id == user_id).map(|u| u.name.as_str())
}

/// Rows in display order: most recently added first
pub fn task_rows(entries: &[TaskEntry], users: &[User]) -> Vec<TaskRow> {
    entries
        .iter()
        .rev()
        .map(|entry| TaskRow {
            key: entry.key,
            id: entry.task.id,
            title: entry.task.title.clone(),
            owner: owner_name(users, entry.task.user_id)
                .unwrap_or(UNKNOWN_USER)
                .to_string(),
            completed: entry.task.completed,
        })
        .collect()
}

/// Options in the order the users were received
pub fn user_options(users: &[User]) -> Vec<UserOption> {
    users
        .iter()
        .map(|u| UserOption {
            value: u.id.to_string(),
            label: u.name.clone(),
        })
        .collect()
}
