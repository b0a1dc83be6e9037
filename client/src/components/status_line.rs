use leptos::prelude::*;

use labnote::state::StatusMessage;

/// Inline success or error line under a form.
#[component]
pub fn StatusLine<F>(status: F) -> impl IntoView
where
    F: Fn() -> Option<StatusMessage> + Send + Sync + 'static,
{
    move || {
        status().map(|msg| {
            let class = if msg.is_error() { "status status--error" } else { "status status--success" };
            view! { <p class=class>{msg.text}</p> }
        })
    }
}
