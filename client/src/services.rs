//! Browser-side services and the controller dispatcher.
//!
//! DESIGN
//! ======
//! The HTTP store and the Quill handles are not `Send`, so they live in a
//! thread-local `StoredValue` whose handle can still be captured by view
//! closures. Controllers run against a copy of `AppState` taken when they
//! start. When they finish, only the fields they changed are merged back
//! into the live signal, so typing done or a modal opened while a request
//! was in flight is kept.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use labnote::api::HttpStore;
use labnote::config::ClientConfig;
use labnote::rich_text::RichFields;
use labnote::state::AppState;

use crate::util::quill::QuillEditor;

/// Which editing surface a widget belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Create,
    Edit,
}

pub struct Services {
    pub store: HttpStore,
    pub create_editors: RichFields<QuillEditor>,
    pub edit_editors: RichFields<QuillEditor>,
}

impl Services {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            store: HttpStore::new(config),
            create_editors: RichFields::new(|_| Some(QuillEditor::default())),
            edit_editors: RichFields::new(|_| Some(QuillEditor::default())),
        }
    }

    pub fn editors(&self, surface: Surface) -> &RichFields<QuillEditor> {
        match surface {
            Surface::Create => &self.create_editors,
            Surface::Edit => &self.edit_editors,
        }
    }
}

pub type ServicesHandle = StoredValue<Rc<Services>, LocalStorage>;

pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}

pub fn use_app_state() -> RwSignal<AppState> {
    expect_context::<RwSignal<AppState>>()
}

/// Run `action` on the event loop and merge what it changed into `state`.
pub fn dispatch(
    state: RwSignal<AppState>,
    services: ServicesHandle,
    action: impl AsyncFnOnce(&Services, &mut AppState) + 'static,
) {
    let services = services.get_value();
    spawn_local(async move {
        let before = state.get_untracked();
        let mut after = before.clone();
        action(&services, &mut after).await;
        state.update(|live| live.apply_changes(&before, after));
    });
}
