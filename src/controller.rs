//! Task Controller
//!
//! Maps each user gesture to one service call and, when that call succeeds,
//! one state mutation. Every failure goes to the notifier and leaves the
//! state untouched.

use std::rc::Rc;

use futures_util::future::join;

use crate::api::{ApiError, TaskApi};
use crate::models::{NewTask, TaskId};
use crate::store::{EntryKey, StateHandle};

pub type Notifier = Rc<dyn Fn(&ApiError)>;

#[derive(Clone)]
pub struct TaskController<A> {
    api: A,
    notify: Notifier,
}

impl<A: TaskApi> TaskController<A> {
    pub fn new(api: A, notify: Notifier) -> Self {
        Self { api, notify }
    }

    /// Fetch tasks and users together. Nothing is loaded unless both arrive.
    pub async fn start(&self, state: &impl StateHandle) -> bool {
        let (tasks, users) = join(self.api.list_tasks(), self.api.list_users()).await;

        match (tasks, users) {
            (Ok(tasks), Ok(users)) => {
                log::info!("[APP] Loaded {} tasks, {} users", tasks.len(), users.len());
                state.load(tasks, users);
                true
            }
            (tasks, users) => {
                for err in [tasks.err(), users.err()].into_iter().flatten() {
                    (self.notify)(&err);
                }
                false
            }
        }
    }

    pub async fn create_task(&self, state: &impl StateHandle, input: NewTask) -> bool {
        match self.api.create_task(&input).await {
            Ok(task) => {
                state.add_task(task);
                true
            }
            Err(e) => {
                (self.notify)(&e);
                false
            }
        }
    }

    /// Records the flag the user picked, not whatever the service echoes.
    pub async fn toggle_task(
        &self,
        state: &impl StateHandle,
        key: EntryKey,
        id: TaskId,
        completed: bool,
    ) -> bool {
        match self.api.set_task_completed(id, completed).await {
            Ok(()) => state.set_completed(key, completed),
            Err(e) => {
                (self.notify)(&e);
                false
            }
        }
    }

    /// Deletes by server id, then drops only the entry that was clicked.
    pub async fn remove_task(&self, state: &impl StateHandle, key: EntryKey, id: TaskId) -> bool {
        match self.api.delete_task(id).await {
            Ok(()) => state.remove_entry(key),
            Err(e) => {
                (self.notify)(&e);
                false
            }
        }
    }
}
