//! Reaction image picker.
//!
//! The owning form keeps the `NodeRef` and reads the file only when it is
//! submitted.

use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn ImageInput(input: NodeRef<Input>) -> impl IntoView {
    view! {
        <label class="image-input">
            <span>"Reaction image"</span>
            <input type="file" accept="image/*" node_ref=input/>
        </label>
    }
}
