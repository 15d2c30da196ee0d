//! Error Notification
//!
//! The one place failures end up: logged, then shown in a blocking alert.

use crate::api::ApiError;

pub fn alert_error(error: &ApiError) {
    log::error!("[APP] {}", error);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&error.to_string());
    }
}
