//! Wire DTOs shared by the REST client and the UI layer.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Rich-text fields arrive as
//! `null` or HTML; they are normalized to `""` on the way in so the rest of
//! the client only ever compares against the empty string.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned notebook identifier.
pub type NotebookId = i64;

/// Server-assigned experiment identifier.
pub type ExperimentId = i64;

/// A named grouping of experiments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: NotebookId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One of the five rich-text sections of an experiment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RichField {
    Objective,
    Materials,
    Procedure,
    Results,
    Notes,
}

impl RichField {
    /// All fields in form/card order.
    pub const ALL: [RichField; 5] = [
        RichField::Objective,
        RichField::Materials,
        RichField::Procedure,
        RichField::Results,
        RichField::Notes,
    ];

    /// JSON key used by the backend.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Objective => "objective",
            Self::Materials => "materials",
            Self::Procedure => "procedure",
            Self::Results => "results",
            Self::Notes => "notes",
        }
    }

    /// Heading shown above the field in forms and cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Objective => "Objective",
            Self::Materials => "Materials",
            Self::Procedure => "Procedure",
            Self::Results => "Results",
            Self::Notes => "Notes",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Objective => 0,
            Self::Materials => 1,
            Self::Procedure => 2,
            Self::Results => 3,
            Self::Notes => 4,
        }
    }
}

/// The five rich-text sections as HTML fragments (`""` means nothing entered).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichContent {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub objective: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub materials: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub procedure: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub results: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub notes: String,
}

impl RichContent {
    /// Build content by asking `f` for each field's HTML.
    pub fn from_fn(f: impl FnMut(RichField) -> String) -> Self {
        let [objective, materials, procedure, results, notes] = RichField::ALL.map(f);
        Self { objective, materials, procedure, results, notes }
    }

    #[must_use]
    pub fn get(&self, field: RichField) -> &str {
        match field {
            RichField::Objective => &self.objective,
            RichField::Materials => &self.materials,
            RichField::Procedure => &self.procedure,
            RichField::Results => &self.results,
            RichField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: RichField, html: String) {
        let slot = match field {
            RichField::Objective => &mut self.objective,
            RichField::Materials => &mut self.materials,
            RichField::Procedure => &mut self.procedure,
            RichField::Results => &mut self.results,
            RichField::Notes => &mut self.notes,
        };
        *slot = html;
    }
}

/// A dated experiment record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: ExperimentId,
    pub notebook_id: NotebookId,
    pub title: String,
    pub date: String,
    #[serde(flatten)]
    pub content: RichContent,
    #[serde(default)]
    pub reaction_image: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /experiments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewExperiment {
    pub notebook_id: NotebookId,
    pub title: String,
    pub date: String,
    #[serde(flatten)]
    pub content: RichContent,
    pub reaction_image: Option<String>,
}

/// Body of `PUT /experiments/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExperimentPatch {
    pub title: String,
    pub date: String,
    #[serde(flatten)]
    pub content: RichContent,
    pub reaction_image: Option<String>,
}

/// An image file chosen by the user, read into memory for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Response of `POST /upload-reaction-image`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
