//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! only touches state through [`StateHandle`], so it can run against a plain
//! `RefCell<AppState>` as well. Both handles funnel into the same
//! [`TaskEntries`] methods.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, User};

/// Client-side identity of a rendered entry.
///
/// The service may echo the same id for several created tasks, so entries
/// are told apart by this key instead.
pub type EntryKey = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct TaskEntry {
    pub key: EntryKey,
    pub task: Task,
}

/// Tasks in insertion order, each under a unique key
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskEntries {
    entries: Vec<TaskEntry>,
    next_key: EntryKey,
}

impl TaskEntries {
    /// Replace every entry; keys keep counting up
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.entries.clear();
        for task in tasks {
            self.push(task);
        }
    }

    pub fn push(&mut self, task: Task) -> EntryKey {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push(TaskEntry { key, task });
        key
    }

    /// Returns false when no entry has this key
    pub fn set_completed(&mut self, key: EntryKey, completed: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.task.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Removes exactly the entry with this key
    pub fn remove(&mut self, key: EntryKey) -> bool {
        match self.entries.iter().position(|e| e.key == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: EntryKey) -> Option<&TaskEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn as_slice(&self) -> &[TaskEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tasks and users for the lifetime of the page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Tasks in insertion order (rendered newest first)
    pub tasks: TaskEntries,
    /// Users in the order the service returned them
    pub users: Vec<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Mutations the controller is allowed to make.
///
/// Implementors only say how to reach the two fields; the mutations
/// themselves live on [`TaskEntries`].
pub trait StateHandle {
    fn update_tasks<R>(&self, f: impl FnOnce(&mut TaskEntries) -> R) -> R;
    fn set_users(&self, users: Vec<User>);

    /// Replace both collections wholesale
    fn load(&self, tasks: Vec<Task>, users: Vec<User>) {
        self.set_users(users);
        self.update_tasks(|entries| entries.replace(tasks));
    }

    fn add_task(&self, task: Task) -> EntryKey {
        self.update_tasks(|entries| entries.push(task))
    }

    fn set_completed(&self, key: EntryKey, completed: bool) -> bool {
        self.update_tasks(|entries| entries.set_completed(key, completed))
    }

    fn remove_entry(&self, key: EntryKey) -> bool {
        self.update_tasks(|entries| entries.remove(key))
    }
}

impl StateHandle for AppStore {
    fn update_tasks<R>(&self, f: impl FnOnce(&mut TaskEntries) -> R) -> R {
        f(&mut *self.tasks().write())
    }

    fn set_users(&self, users: Vec<User>) {
        *self.users().write() = users;
    }
}

impl StateHandle for RefCell<AppState> {
    fn update_tasks<R>(&self, f: impl FnOnce(&mut TaskEntries) -> R) -> R {
        f(&mut self.borrow_mut().tasks)
    }

    fn set_users(&self, users: Vec<User>) {
        self.borrow_mut().users = users;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    fn make_task(id: TaskId, user_id: u32) -> Task {
        Task {
            id,
            user_id,
            title: format!("Task {}", id),
            completed: false,
        }
    }

    fn ids(entries: &TaskEntries) -> Vec<TaskId> {
        entries.as_slice().iter().map(|e| e.task.id).collect()
    }

    #[test]
    fn test_replace_drops_old_entries() {
        let mut entries = TaskEntries::default();
        entries.push(make_task(99, 1));
        entries.replace(vec![make_task(1, 1), make_task(2, 1)]);
        assert_eq!(ids(&entries), vec![1, 2]);
    }

    #[test]
    fn test_keys_are_unique_for_repeated_ids() {
        let mut entries = TaskEntries::default();
        let first = entries.push(make_task(201, 1));
        let second = entries.push(make_task(201, 2));
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_only_the_keyed_entry() {
        let mut entries = TaskEntries::default();
        entries.push(make_task(201, 1));
        let second = entries.push(make_task(201, 2));

        assert!(entries.remove(second));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.as_slice()[0].task.user_id, 1);

        // Unknown key is a no-op
        assert!(!entries.remove(second));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_set_completed() {
        let mut entries = TaskEntries::default();
        let key = entries.push(make_task(7, 1));
        assert!(entries.set_completed(key, true));
        assert!(entries.get(key).unwrap().task.completed);
        assert!(!entries.set_completed(key + 1, true));
    }

    #[test]
    fn test_refcell_handle() {
        let state = RefCell::new(AppState::default());
        let first = state.add_task(make_task(1, 1));
        state.add_task(make_task(2, 1));
        assert!(state.remove_entry(first));
        assert_eq!(ids(&state.borrow().tasks), vec![2]);
    }

    #[test]
    fn test_store_handle() {
        let owner = Owner::new();
        owner.set();

        let store: AppStore = Store::new(AppState::default());
        store.load(
            vec![make_task(5, 1), make_task(6, 2)],
            vec![User { id: 1, name: "Ann".to_string() }],
        );
        assert_eq!(ids(&store.tasks().get_untracked()), vec![5, 6]);
        assert_eq!(store.users().get_untracked().len(), 1);

        let first = store.add_task(make_task(201, 1));
        let second = store.add_task(make_task(201, 2));
        assert_eq!(store.tasks().get_untracked().len(), 4);

        assert!(store.set_completed(second, true));
        assert!(store.tasks().get_untracked().get(second).unwrap().task.completed);
        assert!(!store.tasks().get_untracked().get(first).unwrap().task.completed);

        assert!(store.remove_entry(first));
        assert!(!store.remove_entry(first));
        assert_eq!(ids(&store.tasks().get_untracked()), vec![5, 6, 201]);
    }
}
