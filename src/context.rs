//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTaskApi;
use crate::controller::TaskController;
use crate::store::AppStore;

pub type AppController = TaskController<HttpTaskApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Tasks and users
    pub store: AppStore,
    /// Holds `Rc`s and browser futures, so it lives in local storage
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: AppController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }
}
