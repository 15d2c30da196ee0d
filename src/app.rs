//! Task Board App
//!
//! Root component: creates the store and controller, then loads the
//! initial tasks and users once on mount.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpTaskApi;
use crate::components::{TaskForm, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::{Notifier, TaskController};
use crate::notify;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let notifier: Notifier = Rc::new(notify::alert_error);
    let controller = TaskController::new(HttpTaskApi::new(&config), notifier);

    let ctx = AppContext::new(store, controller);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        log::info!("[APP] Loading tasks and users from {}", config.api_base_url);
        spawn_local(async move {
            ctx.controller().start(&ctx.store).await;
        });
    });

    view! {
        <main class="main-content">
            <h1>"Todo List"</h1>

            <TaskForm />

            <TaskList />

            <p class="item-count">
                {move || format!("{} tasks, {} users", store.tasks().read().len(), store.users().read().len())}
            </p>
        </main>
    }
}
