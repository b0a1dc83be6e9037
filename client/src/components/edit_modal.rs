//! Modal for editing one experiment.
//!
//! The modal stays mounted and is hidden while no session is open, so its
//! Quill widgets are created once and reloaded on every open. The file input
//! is emptied whenever the edited experiment changes.

use leptos::html::Input;
use leptos::prelude::*;

use labnote::edit_modal;
use labnote::state::{EditSession, StatusMessage};
use labnote::types::RichField;

use crate::components::image_input::ImageInput;
use crate::components::rich_text_field::RichTextField;
use crate::components::status_line::StatusLine;
use crate::services::{Surface, dispatch, use_app_state, use_services};
use crate::util::file_input::{clear_selection, read_selected};

#[component]
pub fn EditModal() -> impl IntoView {
    let state = use_app_state();
    let services = use_services();
    let image_input = NodeRef::<Input>::new();

    let editing = Memo::new(move |_| state.with(|s| s.edit.editing_id()));
    Effect::new(move || {
        editing.track();
        clear_selection(image_input);
    });

    let session_field = move |read: fn(&EditSession) -> String| {
        move || state.with(|s| s.edit.session.as_ref().map(read).unwrap_or_default())
    };
    let update_session = move |write: fn(&mut EditSession, String), value: String| {
        state.update(|s| {
            if let Some(session) = s.edit.session.as_mut() {
                write(session, value);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(state, services, async move |svc, st| {
            let replacement = match read_selected(image_input).await {
                Ok(image) => image,
                Err(e) => {
                    log::warn!("reading reaction image failed: {e}");
                    clear_selection(image_input);
                    st.edit.status = Some(StatusMessage::error(format!("Error: {e}")));
                    return;
                }
            };
            edit_modal::submit(&svc.store, st, &svc.edit_editors, replacement).await;
        });
    };
    let on_cancel = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        state.update(edit_modal::close);
    };

    let preview = move || {
        state
            .with(|s| s.edit.session.as_ref().and_then(|x| x.preview_image().map(str::to_owned)))
            .map(|url| view! { <img class="edit-modal__preview" src=url alt="Current reaction image"/> })
    };

    view! {
        <div class="modal" class:hidden=move || !state.with(|s| s.edit.is_open())>
            <div class="modal__content">
                <h2>"Edit experiment"</h2>
                <form on:submit=on_submit>
                    <div class="form-row">
                        <label>
                            <span>"Title"</span>
                            <input
                                type="text"
                                prop:value=session_field(|x| x.title.clone())
                                on:input=move |ev| update_session(|x, v| x.title = v, event_target_value(&ev))
                            />
                        </label>
                        <label>
                            <span>"Date"</span>
                            <input
                                type="date"
                                prop:value=session_field(|x| x.date.clone())
                                on:input=move |ev| update_session(|x, v| x.date = v, event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <RichTextField field=RichField::Objective surface=Surface::Edit/>
                    <RichTextField field=RichField::Materials surface=Surface::Edit/>
                    {preview}
                    <ImageInput input=image_input/>
                    <RichTextField field=RichField::Procedure surface=Surface::Edit/>
                    <RichTextField field=RichField::Results surface=Surface::Edit/>
                    <RichTextField field=RichField::Notes surface=Surface::Edit/>
                    <div class="modal__actions">
                        <button type="submit" class="btn btn--primary">"Save changes"</button>
                        <button type="button" class="btn" on:click=on_cancel>"Cancel"</button>
                    </div>
                    <StatusLine status=move || state.with(|s| s.edit.status.clone())/>
                </form>
            </div>
        </div>
    }
}
