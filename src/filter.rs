//! Experiment list filter criteria.
//!
//! DESIGN
//! ======
//! `FilterInputs` is what the filter bar holds; `FilterCriteria` is the
//! normalized query derived from it on every reload. An exact date always
//! wins over a start/end range, so the two are never sent together.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::types::{Experiment, NotebookId};

/// Raw filter bar values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub date: String,
    pub start_date: String,
    pub end_date: String,
    pub title: String,
}

impl FilterInputs {
    /// Derive the query criteria, ignoring blank inputs.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        let date = non_blank(&self.date);
        let dates = match date {
            Some(date) => DateFilter::Exact(date),
            None => match (non_blank(&self.start_date), non_blank(&self.end_date)) {
                (None, None) => DateFilter::Any,
                (start, end) => DateFilter::Range { start, end },
            },
        };
        FilterCriteria { dates, title: non_blank(&self.title) }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Date part of the criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    Any,
    Exact(String),
    Range { start: Option<String>, end: Option<String> },
}

/// Normalized experiment query for one notebook.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub dates: DateFilter,
    pub title: Option<String>,
}

impl FilterCriteria {
    /// Query string pairs for `GET /experiments`, `notebook_id` first.
    #[must_use]
    pub fn query_pairs(&self, notebook_id: NotebookId) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("notebook_id", notebook_id.to_string())];
        match &self.dates {
            DateFilter::Any => {}
            DateFilter::Exact(date) => pairs.push(("date", date.clone())),
            DateFilter::Range { start, end } => {
                if let Some(start) = start {
                    pairs.push(("start_date", start.clone()));
                }
                if let Some(end) = end {
                    pairs.push(("end_date", end.clone()));
                }
            }
        }
        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        pairs
    }

    /// Whether `experiment` passes the criteria under the backend's rules:
    /// date equality or an inclusive ISO-date range, and a case-insensitive
    /// title substring.
    #[must_use]
    pub fn matches(&self, experiment: &Experiment) -> bool {
        let date = experiment.date.as_str();
        let date_ok = match &self.dates {
            DateFilter::Any => true,
            DateFilter::Exact(exact) => date == exact,
            DateFilter::Range { start, end } => {
                start.as_deref().map_or(true, |s| date >= s) && end.as_deref().map_or(true, |e| date <= e)
            }
        };
        let title_ok = self.title.as_deref().map_or(true, |needle| {
            experiment.title.to_lowercase().contains(&needle.to_lowercase())
        });
        date_ok && title_ok
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
