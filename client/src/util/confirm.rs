//! Native confirmation dialog.

/// Ask through `window.confirm`; anything but an explicit OK declines.
pub fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
