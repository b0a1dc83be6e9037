//! Inline "new experiment" form controller.

#[cfg(test)]
#[path = "create_form_test.rs"]
mod create_form_test;

use log::warn;

use crate::api::{ApiError, RemoteStore};
use crate::experiments;
use crate::rich_text::{RichFields, RichTextEditor};
use crate::state::{AppState, StatusMessage};
use crate::types::{ImageUpload, NewExperiment, NotebookId, RichContent};

pub const NO_NOTEBOOK_MESSAGE: &str = "Create or select a notebook first.";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and date are required.";
pub const SAVED_MESSAGE: &str = "Saved.";

/// Validate, upload `image` if one was chosen, and create the experiment.
///
/// Validation failures set an inline error and issue no request. On a remote
/// failure the form keeps its inputs so the user can retry.
pub async fn submit<S, E>(
    store: &S,
    state: &mut AppState,
    editors: &RichFields<E>,
    image: Option<ImageUpload>,
) where
    S: RemoteStore + ?Sized,
    E: RichTextEditor,
{
    let content = editors.extract();
    let Some(notebook_id) = state.selected_notebook_id() else {
        state.create.status = Some(StatusMessage::error(NO_NOTEBOOK_MESSAGE));
        return;
    };
    let title = state.create.title.trim().to_owned();
    let date = state.create.date.trim().to_owned();
    if title.is_empty() || date.is_empty() {
        state.create.status = Some(StatusMessage::error(REQUIRED_FIELDS_MESSAGE));
        return;
    }

    match save(store, notebook_id, title, date, content, image.as_ref()).await {
        Ok(()) => {
            state.create.status = Some(StatusMessage::success(SAVED_MESSAGE));
            state.create.reset_inputs();
            editors.clear();
            experiments::reload(store, state).await;
        }
        Err(e) => {
            warn!("experiment create failed: {e}");
            state.create.status = Some(StatusMessage::error(format!("Error: {e}")));
        }
    }
}

async fn save<S: RemoteStore + ?Sized>(
    store: &S,
    notebook_id: NotebookId,
    title: String,
    date: String,
    content: RichContent,
    image: Option<&ImageUpload>,
) -> Result<(), ApiError> {
    let reaction_image = match image {
        Some(image) => Some(store.asset_url(&store.upload_image(image).await?)),
        None => None,
    };
    let experiment = NewExperiment { notebook_id, title, date, content, reaction_image };
    store.create_experiment(&experiment).await?;
    Ok(())
}
