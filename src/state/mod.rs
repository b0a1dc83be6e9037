//! Application state shared by every handler.
//!
//! DESIGN
//! ======
//! One explicit value replaces the page-level globals of a script client:
//! the selected notebook, the editing session and each surface's inputs and
//! status all live here, and controllers receive it by `&mut`. The browser
//! shell keeps it in a single reactive signal.
//!
//! Presentation-only state (which notebook is highlighted, whether the modal
//! is visible) is derived from these fields rather than stored separately.
//!
//! Async controllers run on a copy taken when they start. When they finish,
//! [`AppState::apply_changes`] folds back only the fields they touched, so
//! a modal opened or a form typed into while a request was in flight
//! survives its response.


mod forms;
mod lists;

pub use forms::{CreateForm, EditModal, EditSession};
pub use lists::{ExperimentList, ListView, NotebookListView, NotebookPanel};

/// Tone of an inline status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Inline message under a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// Whole-client state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub notebooks: NotebookPanel,
    pub experiments: ExperimentList,
    pub create: CreateForm,
    pub edit: EditModal,
}

impl AppState {
    /// Id of the selected notebook, if any.
    #[must_use]
    pub fn selected_notebook_id(&self) -> Option<crate::types::NotebookId> {
        self.notebooks.selected.as_ref().map(|nb| nb.id)
    }

    /// Merge the result of an action that ran on a copy of `before`.
    ///
    /// Fields the action left alone keep their live value. Fields filled
    /// from server responses take the action's value. Fields the user types
    /// into take it only if the user has not changed them since `before`.
    pub fn apply_changes(&mut self, before: &AppState, after: AppState) {
        let AppState {
            notebooks: NotebookPanel { items, view: notebook_view, selected, name_input, alert: notebook_alert },
            experiments: ExperimentList { filters, view, alert },
            create: CreateForm { title, date, status: create_status },
            edit: EditModal { session, status: edit_status },
        } = after;

        let panel = &mut self.notebooks;
        take_changed(&mut panel.items, &before.notebooks.items, items);
        take_changed(&mut panel.view, &before.notebooks.view, notebook_view);
        take_changed(&mut panel.selected, &before.notebooks.selected, selected);
        take_changed(&mut panel.alert, &before.notebooks.alert, notebook_alert);
        take_unless_edited(&mut panel.name_input, &before.notebooks.name_input, name_input);

        let list = &mut self.experiments;
        take_changed(&mut list.view, &before.experiments.view, view);
        take_changed(&mut list.alert, &before.experiments.alert, alert);
        take_unless_edited(&mut list.filters, &before.experiments.filters, filters);

        take_changed(&mut self.create.status, &before.create.status, create_status);
        take_unless_edited(&mut self.create.title, &before.create.title, title);
        take_unless_edited(&mut self.create.date, &before.create.date, date);

        take_changed(&mut self.edit.status, &before.edit.status, edit_status);
        take_unless_edited(&mut self.edit.session, &before.edit.session, session);
    }
}

fn take_changed<T: PartialEq>(live: &mut T, before: &T, after: T) {
    if after != *before {
        *live = after;
    }
}

fn take_unless_edited<T: PartialEq>(live: &mut T, before: &T, after: T) {
    if after != *before && *live == *before {
        *live = after;
    }
}
