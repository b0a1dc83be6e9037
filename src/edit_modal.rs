//! Modal edit form controller.
//!
//! At most one experiment is edited at a time. The session keeps the
//! experiment as last fetched so an empty image input leaves the stored
//! `reaction_image` as it was.

#[cfg(test)]
#[path = "edit_modal_test.rs"]
mod edit_modal_test;

use log::warn;

use crate::api::{ApiError, RemoteStore};
use crate::create_form::REQUIRED_FIELDS_MESSAGE;
use crate::experiments;
use crate::rich_text::{RichFields, RichTextEditor};
use crate::state::{AppState, EditSession, StatusMessage};
use crate::types::{Experiment, ExperimentId, ExperimentPatch, ImageUpload, RichContent};

pub const UPDATED_MESSAGE: &str = "Changes saved.";

/// Open the modal on `experiment`, replacing any previous session.
pub fn open<E: RichTextEditor>(state: &mut AppState, editors: &RichFields<E>, experiment: Experiment) {
    editors.load(&experiment.content);
    state.edit.status = None;
    state.edit.session = Some(EditSession::new(experiment));
}

/// Save the modal's inputs over the targeted experiment.
///
/// `replacement` is the file picked in the modal at submit time, if any.
pub async fn submit<S, E>(
    store: &S,
    state: &mut AppState,
    editors: &RichFields<E>,
    replacement: Option<ImageUpload>,
) where
    S: RemoteStore + ?Sized,
    E: RichTextEditor,
{
    let Some(session) = state.edit.session.as_ref() else {
        return;
    };
    let title = session.title.trim().to_owned();
    let date = session.date.trim().to_owned();
    let content = editors.extract();
    if title.is_empty() || date.is_empty() {
        state.edit.status = Some(StatusMessage::error(REQUIRED_FIELDS_MESSAGE));
        return;
    }

    let id = session.id();
    let previous_image = session.preview_image().map(str::to_owned);
    match save(store, id, title, date, content, previous_image, replacement.as_ref()).await {
        Ok(()) => {
            state.edit.status = Some(StatusMessage::success(UPDATED_MESSAGE));
            experiments::reload(store, state).await;
            close(state);
        }
        Err(e) => {
            warn!("experiment {id} update failed: {e}");
            state.edit.status = Some(StatusMessage::error(format!("Error: {e}")));
        }
    }
}

/// Hide the modal and drop the session and its status line.
pub fn close(state: &mut AppState) {
    state.edit.session = None;
    state.edit.status = None;
}

async fn save<S: RemoteStore + ?Sized>(
    store: &S,
    id: ExperimentId,
    title: String,
    date: String,
    content: RichContent,
    previous_image: Option<String>,
    replacement: Option<&ImageUpload>,
) -> Result<(), ApiError> {
    let reaction_image = match replacement {
        Some(image) => Some(store.asset_url(&store.upload_image(image).await?)),
        None => previous_image,
    };
    let patch = ExperimentPatch { title, date, content, reaction_image };
    store.update_experiment(id, &patch).await?;
    Ok(())
}
