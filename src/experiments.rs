//! Experiment list controller.

#[cfg(test)]
#[path = "experiments_test.rs"]
mod experiments_test;

use log::warn;

use crate::api::RemoteStore;
use crate::confirm::Confirm;
use crate::state::{AppState, ListView};
use crate::types::ExperimentId;

pub const DELETE_EXPERIMENT_PROMPT: &str = "Delete this experiment?";

/// Re-query the selected notebook's experiments under the current filter inputs.
pub async fn reload<S: RemoteStore + ?Sized>(store: &S, state: &mut AppState) {
    let Some(notebook_id) = state.selected_notebook_id() else {
        state.experiments.view = ListView::NoSelection;
        return;
    };
    let criteria = state.experiments.filters.criteria();
    state.experiments.view = ListView::Loading;
    state.experiments.view = match store.list_experiments(notebook_id, &criteria).await {
        Ok(items) if items.is_empty() => ListView::Empty,
        Ok(items) => ListView::Loaded(items),
        Err(e) => {
            warn!("experiment list failed for notebook {notebook_id}: {e}");
            ListView::Failed(e.message())
        }
    };
}

/// Apply the filter bar as currently filled in.
pub async fn apply_filters<S: RemoteStore + ?Sized>(store: &S, state: &mut AppState) {
    reload(store, state).await;
}

/// Clear every filter input and reload unfiltered.
pub async fn reset_filters<S: RemoteStore + ?Sized>(store: &S, state: &mut AppState) {
    state.experiments.filters.clear();
    reload(store, state).await;
}

/// Delete experiment `id` after confirmation, then reload with the same filters.
pub async fn delete<S, C>(store: &S, confirm: &C, state: &mut AppState, id: ExperimentId)
where
    S: RemoteStore + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(DELETE_EXPERIMENT_PROMPT) {
        return;
    }
    state.experiments.alert = None;
    match store.delete_experiment(id).await {
        Ok(()) => reload(store, state).await,
        Err(e) => {
            warn!("experiment delete failed: {e}");
            state.experiments.alert = Some(format!("Failed to delete experiment: {e}"));
        }
    }
}
