//! Experiment card view model and click routing.
//!
//! DESIGN
//! ======
//! The card is computed here so the "only render non-empty sections" rule
//! is testable without a DOM. The view layer maps [`Card`] to markup and
//! routes clicks through [`card_action`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::types::{Experiment, ExperimentId, RichField};

/// Body of one card section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBody {
    /// Stored rich-text HTML, rendered as markup.
    Html(String),
    /// Reaction image URL.
    Image(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSection {
    pub label: &'static str,
    pub body: SectionBody,
}

/// Everything the list shows for one experiment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: ExperimentId,
    pub title: String,
    pub date: String,
    pub created_at: String,
    pub sections: Vec<CardSection>,
}

pub const REACTION_LABEL: &str = "Reaction";

/// Build the card for `experiment`. Sections appear in a fixed order and only
/// when non-empty: objective, materials, reaction image, procedure, results, notes.
#[must_use]
pub fn card(experiment: &Experiment) -> Card {
    let rich = |field: RichField| {
        let html = experiment.content.get(field);
        (!html.is_empty()).then(|| CardSection { label: field.label(), body: SectionBody::Html(html.to_owned()) })
    };
    let image = experiment
        .reaction_image
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| CardSection { label: REACTION_LABEL, body: SectionBody::Image(url.to_owned()) });

    let sections = [
        rich(RichField::Objective),
        rich(RichField::Materials),
        image,
        rich(RichField::Procedure),
        rich(RichField::Results),
        rich(RichField::Notes),
    ]
    .into_iter()
    .flatten()
    .collect();

    Card {
        id: experiment.id,
        title: experiment.title.clone(),
        date: experiment.date.clone(),
        created_at: experiment.created_at.clone(),
        sections,
    }
}

/// Part of a card that received a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTarget {
    Body,
    EditButton,
    DeleteButton,
}

/// What a card click does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    OpenEditor,
    Delete,
}

#[must_use]
pub fn card_action(target: CardTarget) -> CardAction {
    match target {
        CardTarget::Body | CardTarget::EditButton => CardAction::OpenEditor,
        CardTarget::DeleteButton => CardAction::Delete,
    }
}
