//! Task List Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;
use crate::view::task_rows;

/// Renders every task, newest first
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = move || task_rows(ctx.store.tasks().read().as_slice(), &ctx.store.users().read());

    view! {
        <ul class="todo-list">
            <For
                each=rows
                key=|row| row.key
                children=move |row| view! { <TaskItem row=row /> }
            />
        </ul>
    }
}
