//! Blocking Operator Notifications
//!
//! Every surfaced error and confirmation goes through the browser's
//! modal dialogs; nothing is logged centrally or retried.

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
