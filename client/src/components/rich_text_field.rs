//! Labeled container hosting one Quill widget.

use leptos::prelude::*;

use labnote::types::RichField;

use crate::services::{Surface, use_services};

#[component]
pub fn RichTextField(field: RichField, surface: Surface) -> impl IntoView {
    let services = use_services();
    let host = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if let Some(el) = host.get() {
            let services = services.get_value();
            if let Some(editor) = services.editors(surface).get(field) {
                editor.attach(&el);
            }
        }
    });

    view! {
        <div class="rich-field">
            <label class="rich-field__label">{field.label()}</label>
            <div class="rich-field__editor" node_ref=host></div>
        </div>
    }
}
