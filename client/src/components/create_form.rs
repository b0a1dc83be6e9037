//! Inline "new experiment" form.

use leptos::html::Input;
use leptos::prelude::*;

use labnote::create_form;
use labnote::state::StatusMessage;
use labnote::types::RichField;

use crate::components::image_input::ImageInput;
use crate::components::rich_text_field::RichTextField;
use crate::components::status_line::StatusLine;
use crate::services::{Surface, dispatch, use_app_state, use_services};
use crate::util::file_input::{clear_selection, read_selected};

#[component]
pub fn CreateForm() -> impl IntoView {
    let state = use_app_state();
    let services = use_services();
    let image_input = NodeRef::<Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(state, services, async move |svc, st| {
            let image = match read_selected(image_input).await {
                Ok(image) => image,
                Err(e) => {
                    log::warn!("reading reaction image failed: {e}");
                    clear_selection(image_input);
                    st.create.status = Some(StatusMessage::error(format!("Error: {e}")));
                    return;
                }
            };
            create_form::submit(&svc.store, st, &svc.create_editors, image).await;
            if st.create.status.as_ref().is_some_and(|status| !status.is_error()) {
                clear_selection(image_input);
            }
        });
    };

    view! {
        <section class="create-form">
            <h2>"New experiment"</h2>
            <form on:submit=on_submit>
                <div class="form-row">
                    <label>
                        <span>"Title"</span>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.create.title.clone())
                            on:input=move |ev| state.update(|s| s.create.title = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        <span>"Date"</span>
                        <input
                            type="date"
                            prop:value=move || state.with(|s| s.create.date.clone())
                            on:input=move |ev| state.update(|s| s.create.date = event_target_value(&ev))
                        />
                    </label>
                </div>
                <RichTextField field=RichField::Objective surface=Surface::Create/>
                <RichTextField field=RichField::Materials surface=Surface::Create/>
                <ImageInput input=image_input/>
                <RichTextField field=RichField::Procedure surface=Surface::Create/>
                <RichTextField field=RichField::Results surface=Surface::Create/>
                <RichTextField field=RichField::Notes surface=Surface::Create/>
                <button type="submit" class="btn btn--primary">"Save experiment"</button>
                <StatusLine status=move || state.with(|s| s.create.status.clone())/>
            </form>
        </section>
    }
}
