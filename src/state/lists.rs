//! Notebook panel and experiment list state.

use crate::filter::FilterInputs;
use crate::types::{Experiment, Notebook, NotebookId};

/// What the notebook list area shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NotebookListView {
    #[default]
    Loading,
    Empty,
    Loaded,
    Failed,
}

impl NotebookListView {
    /// Placeholder text shown instead of list items.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading…"),
            Self::Empty => Some("No notebooks yet. Create one to get started."),
            Self::Loaded => None,
            Self::Failed => Some("Failed to load notebooks."),
        }
    }
}

/// Left-hand notebook panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotebookPanel {
    /// Notebooks from the last successful fetch, in server order.
    pub items: Vec<Notebook>,
    pub view: NotebookListView,
    /// The single selected notebook.
    pub selected: Option<Notebook>,
    /// "New notebook" input.
    pub name_input: String,
    /// Last create/delete failure, shown until the next attempt.
    pub alert: Option<String>,
}

impl NotebookPanel {
    #[must_use]
    pub fn is_selected(&self, id: NotebookId) -> bool {
        self.selected.as_ref().is_some_and(|nb| nb.id == id)
    }

    /// Header label for the current selection.
    #[must_use]
    pub fn selection_label(&self) -> String {
        match &self.selected {
            Some(nb) => format!("{} (ID: {})", nb.name, nb.id),
            None => "(none selected)".to_owned(),
        }
    }
}

/// What the experiment list area shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// No notebook is selected.
    #[default]
    NoSelection,
    /// There are no notebooks at all; nothing is shown.
    Cleared,
    Loading,
    /// The query matched nothing.
    Empty,
    Loaded(Vec<Experiment>),
    Failed(String),
}

impl ListView {
    /// Placeholder text shown instead of cards.
    #[must_use]
    pub fn placeholder(&self) -> Option<String> {
        match self {
            Self::NoSelection => Some("Select a notebook on the left first.".to_owned()),
            Self::Cleared | Self::Loaded(_) => None,
            Self::Loading => Some("Loading experiments…".to_owned()),
            Self::Empty => Some("No experiments match the current filters.".to_owned()),
            Self::Failed(message) => Some(format!("Failed to load experiments: {message}")),
        }
    }

    /// Experiments currently rendered as cards.
    #[must_use]
    pub fn experiments(&self) -> &[Experiment] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Experiment list with its filter bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExperimentList {
    pub filters: FilterInputs,
    pub view: ListView,
    /// Last delete failure.
    pub alert: Option<String>,
}
