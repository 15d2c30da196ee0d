//! Task Form Component
//!
//! User select plus title input for creating tasks.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::NewTask;
use crate::store::AppStateStoreFields;
use crate::view::user_options;

/// Form for creating new tasks
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let user_select = NodeRef::<html::Select>::new();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user_value = user_select.get().map(|select| select.value()).unwrap_or_default();
        let input = NewTask::from_form(&user_value, title.get());

        spawn_local(async move {
            if ctx.controller().create_task(&ctx.store, input).await {
                set_title.set(String::new());
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=create_task>
            <select class="todo-form__userSelect" name="user" node_ref=user_select>
                <For
                    each=move || user_options(&ctx.store.users().read())
                    key=|option| option.value.clone()
                    children=|option| view! { <option value=option.value>{option.label}</option> }
                />
            </select>
            <input
                type="text"
                name="todo"
                placeholder="Add new task..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
