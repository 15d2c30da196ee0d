//! UI Components
//!
//! Leptos components for the task form and list.

mod task_form;
mod task_item;
mod task_list;

pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
