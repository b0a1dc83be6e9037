//! Notebook panel controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns the single notebook selection. Every change to the notebook
//! set or the selection ends in an experiment list reload so the list always
//! belongs to the selected notebook.

#[cfg(test)]
#[path = "notebooks_test.rs"]
mod notebooks_test;

use log::warn;

use crate::api::RemoteStore;
use crate::confirm::Confirm;
use crate::experiments;
use crate::state::{AppState, ListView, NotebookListView};
use crate::types::NotebookId;

pub const DELETE_NOTEBOOK_PROMPT: &str = "Deleting a notebook also deletes all of its experiments. Continue?";

/// Fetch the notebook list, repair the selection, and reload experiments.
pub async fn reload<S: RemoteStore + ?Sized>(store: &S, state: &mut AppState) {
    state.notebooks.view = NotebookListView::Loading;
    let notebooks = match store.list_notebooks().await {
        Ok(notebooks) => notebooks,
        Err(e) => {
            warn!("notebook list failed: {e}");
            state.notebooks.view = NotebookListView::Failed;
            return;
        }
    };

    let panel = &mut state.notebooks;
    if notebooks.is_empty() {
        panel.items.clear();
        panel.selected = None;
        panel.view = NotebookListView::Empty;
        state.experiments.view = ListView::Cleared;
        return;
    }

    // Keep the selection if it survived, refreshing its name; otherwise the first notebook.
    let current = panel.selected.as_ref().map(|nb| nb.id);
    let selected = current
        .and_then(|id| notebooks.iter().find(|nb| nb.id == id))
        .unwrap_or(&notebooks[0])
        .clone();
    panel.selected = Some(selected);
    panel.items = notebooks;
    panel.view = NotebookListView::Loaded;

    experiments::reload(store, state).await;
}

/// Select notebook `id` and reload its experiments under the current filters.
pub async fn select<S: RemoteStore + ?Sized>(store: &S, state: &mut AppState, id: NotebookId) {
    let Some(notebook) = state.notebooks.items.iter().find(|nb| nb.id == id).cloned() else {
        return;
    };
    state.notebooks.selected = Some(notebook);
    experiments::reload(store, state).await;
}

/// Create a notebook from the panel's name input.
pub async fn create<S: RemoteStore + ?Sized>(store: &S, state: &mut AppState) {
    let name = state.notebooks.name_input.trim().to_owned();
    if name.is_empty() {
        return;
    }
    state.notebooks.alert = None;
    match store.create_notebook(&name).await {
        Ok(_) => {
            state.notebooks.name_input.clear();
            reload(store, state).await;
        }
        Err(e) => {
            warn!("notebook create failed: {e}");
            state.notebooks.alert = Some(format!("Failed to create notebook: {e}"));
        }
    }
}

/// Delete notebook `id` and its experiments after confirmation.
pub async fn delete<S, C>(store: &S, confirm: &C, state: &mut AppState, id: NotebookId)
where
    S: RemoteStore + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(DELETE_NOTEBOOK_PROMPT) {
        return;
    }
    state.notebooks.alert = None;
    match store.delete_notebook(id).await {
        Ok(()) => reload(store, state).await,
        Err(e) => {
            warn!("notebook delete failed: {e}");
            state.notebooks.alert = Some(format!("Failed to delete notebook: {e}"));
        }
    }
}
