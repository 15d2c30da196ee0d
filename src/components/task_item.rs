//! Task Item Component
//!
//! One list entry: completion checkbox, title with owner, remove control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::view::TaskRow;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let key = row.key;
    let id = row.id;

    let toggle = move |ev: web_sys::Event| {
        let checkbox = event_target::<web_sys::HtmlInputElement>(&ev);
        let completed = checkbox.checked();
        spawn_local(async move {
            // Failed update: put the box back the way it was
            if !ctx.controller().toggle_task(&ctx.store, key, id, completed).await {
                checkbox.set_checked(!completed);
            }
        });
    };

    let remove = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            ctx.controller().remove_task(&ctx.store, key, id).await;
        });
    };

    view! {
        <li class="todo-item" data-id=id.to_string()>
            <input type="checkbox" prop:checked=row.completed on:change=toggle />
            <span>
                {row.title} <br /> <i>"by"</i> " " <b>{row.owner}</b>
            </span>
            <span class="close" on:click=remove>"×"</span>
        </li>
    }
}
