//! Blocking browser dialogs for destructive actions.

/// Simple confirm dialog via browser; answers false when no window exists.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking alert, used for backend rejections of destructive actions.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
