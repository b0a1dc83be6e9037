//! Remote store client for notebooks, experiments and reaction images.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RemoteStore` is the seam between controllers and the backend. `HttpStore`
//! speaks the backend's REST contract through `reqwest`; tests substitute an
//! in-memory store.
//!
//! ERROR HANDLING
//! ==============
//! Every response status is checked. Failures carry a human-readable message
//! taken from the body's `{detail}` when the server sent one, otherwise a
//! generic per-operation message. `ApiError`'s `Display` is that message
//! alone so callers can show it verbatim.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

mod http;

pub use http::HttpStore;

use serde::Deserialize;

use crate::filter::FilterCriteria;
use crate::types::{Experiment, ExperimentId, ExperimentPatch, ImageUpload, NewExperiment, Notebook, NotebookId};

pub(crate) const LOAD_FAILED: &str = "load failed";
pub(crate) const CREATE_FAILED: &str = "create failed";
pub(crate) const DELETE_FAILED: &str = "delete failed";
pub(crate) const SAVE_FAILED: &str = "save failed";
pub(crate) const UPDATE_FAILED: &str = "update failed";
pub(crate) const UPLOAD_FAILED: &str = "image upload failed";

/// Failure of a remote store call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// A success response body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for showing to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Backend operations used by the controllers.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait RemoteStore {
    /// `GET /notebooks`, in server order.
    async fn list_notebooks(&self) -> Result<Vec<Notebook>, ApiError>;

    /// `POST /notebooks`.
    async fn create_notebook(&self, name: &str) -> Result<Notebook, ApiError>;

    /// `DELETE /notebooks/{id}`; the server deletes the notebook's experiments too.
    async fn delete_notebook(&self, id: NotebookId) -> Result<(), ApiError>;

    /// `GET /experiments` scoped to one notebook.
    async fn list_experiments(
        &self,
        notebook_id: NotebookId,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Experiment>, ApiError>;

    /// `POST /experiments`.
    async fn create_experiment(&self, experiment: &NewExperiment) -> Result<Experiment, ApiError>;

    /// `PUT /experiments/{id}`.
    async fn update_experiment(&self, id: ExperimentId, patch: &ExperimentPatch) -> Result<Experiment, ApiError>;

    /// `DELETE /experiments/{id}`.
    async fn delete_experiment(&self, id: ExperimentId) -> Result<(), ApiError>;

    /// `POST /upload-reaction-image`. Returns the server-relative path; pass
    /// it through [`RemoteStore::asset_url`] before storing it.
    async fn upload_image(&self, image: &ImageUpload) -> Result<String, ApiError>;

    /// Resolve a server-relative path against the backend base address.
    fn asset_url(&self, path: &str) -> String;
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pull `{detail}` out of an error body, falling back to `fallback` when the
/// body is not JSON or carries no usable detail string.
#[must_use]
pub fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| fallback.to_owned())
}

/// Join `path` onto `base`, leaving absolute URLs untouched.
#[must_use]
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
