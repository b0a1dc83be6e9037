//! Create form and edit modal state.

use super::StatusMessage;
use crate::types::{Experiment, ExperimentId};

/// Native (non rich-text) inputs of the inline create form.
///
/// The reaction image stays in the page's file input and is read only when
/// the form is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub date: String,
    pub status: Option<StatusMessage>,
}

impl CreateForm {
    /// Reset the native inputs after a successful save.
    pub fn reset_inputs(&mut self) {
        self.title.clear();
        self.date.clear();
    }
}

/// The one in-flight edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Last-known server state of the experiment being edited.
    pub target: Experiment,
    pub title: String,
    pub date: String,
}

impl EditSession {
    #[must_use]
    pub fn new(target: Experiment) -> Self {
        Self { title: target.title.clone(), date: target.date.clone(), target }
    }

    #[must_use]
    pub fn id(&self) -> ExperimentId {
        self.target.id
    }

    /// The stored image, if any. An empty URL counts as no image.
    #[must_use]
    pub fn preview_image(&self) -> Option<&str> {
        self.target.reaction_image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Modal edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditModal {
    pub session: Option<EditSession>,
    pub status: Option<StatusMessage>,
}

impl EditModal {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<ExperimentId> {
        self.session.as_ref().map(EditSession::id)
    }
}
