//! In-memory doubles for controller tests.
//!
//! `MemoryStore` follows the backend's observable rules: ids are assigned in
//! insertion order, experiments list by `(date, id)`, notebook deletion
//! cascades, updates keep the stored image when none is sent, and uploads
//! only accept `image/*`. `MemoryEditor` imitates a widget whose paste
//! pipeline collapses insignificant whitespace and whose empty document
//! serializes to `<p><br></p>`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::{ApiError, RemoteStore, resolve_url};
use crate::confirm::Confirm;
use crate::filter::FilterCriteria;
use crate::rich_text::{RichFields, RichTextEditor};
use crate::types::{
    Experiment, ExperimentId, ExperimentPatch, ImageUpload, NewExperiment, Notebook, NotebookId, RichContent,
};

pub const TEST_BASE: &str = "http://lab.test";

#[derive(Default)]
struct Inner {
    notebooks: Vec<Notebook>,
    experiments: Vec<Experiment>,
    next_id: i64,
    uploads: u32,
    requests: Vec<&'static str>,
    patches: Vec<ExperimentPatch>,
    failures: HashMap<&'static str, ApiError>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, op: &'static str) -> Result<(), ApiError> {
        self.requests.push(op);
        match self.failures.remove(op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory store lock poisoned")
    }

    pub fn seed_notebook(&self, name: &str) -> NotebookId {
        let mut inner = self.lock();
        let id = inner.next_id();
        inner.notebooks.push(Notebook { id, name: name.to_owned(), created_at: None });
        id
    }

    pub fn seed_experiment(&self, notebook_id: NotebookId, title: &str, date: &str) -> Experiment {
        let mut inner = self.lock();
        let id = inner.next_id();
        let experiment = Experiment {
            id,
            notebook_id,
            title: title.to_owned(),
            date: date.to_owned(),
            content: RichContent::default(),
            reaction_image: None,
            created_at: "2024-01-01T00:00:00".to_owned(),
        };
        inner.experiments.push(experiment.clone());
        experiment
    }

    pub fn put_experiment(&self, experiment: Experiment) {
        let mut inner = self.lock();
        inner.experiments.retain(|e| e.id != experiment.id);
        inner.experiments.push(experiment);
    }

    pub fn experiment(&self, id: ExperimentId) -> Option<Experiment> {
        self.lock().experiments.iter().find(|e| e.id == id).cloned()
    }

    pub fn notebooks(&self) -> Vec<Notebook> {
        self.lock().notebooks.clone()
    }

    pub fn experiment_count(&self) -> usize {
        self.lock().experiments.len()
    }

    /// Make the next call to `op` fail with `{detail: message}` semantics.
    pub fn fail_next(&self, op: &'static str, message: &str) {
        self.lock()
            .failures
            .insert(op, ApiError::Server { status: 500, message: message.to_owned() });
    }

    pub fn requests(&self) -> Vec<&'static str> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn count(&self, op: &str) -> usize {
        self.lock().requests.iter().filter(|r| **r == op).count()
    }

    /// Body of the most recent update request, as sent.
    pub fn last_patch(&self) -> Option<ExperimentPatch> {
        self.lock().patches.last().cloned()
    }
}

#[async_trait::async_trait]
impl RemoteStore for MemoryStore {
    async fn list_notebooks(&self) -> Result<Vec<Notebook>, ApiError> {
        let mut inner = self.lock();
        inner.record("list_notebooks")?;
        Ok(inner.notebooks.clone())
    }

    async fn create_notebook(&self, name: &str) -> Result<Notebook, ApiError> {
        let mut inner = self.lock();
        inner.record("create_notebook")?;
        let id = inner.next_id();
        let notebook = Notebook { id, name: name.to_owned(), created_at: None };
        inner.notebooks.push(notebook.clone());
        Ok(notebook)
    }

    async fn delete_notebook(&self, id: NotebookId) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.record("delete_notebook")?;
        inner.experiments.retain(|e| e.notebook_id != id);
        inner.notebooks.retain(|nb| nb.id != id);
        Ok(())
    }

    async fn list_experiments(
        &self,
        notebook_id: NotebookId,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Experiment>, ApiError> {
        let mut inner = self.lock();
        inner.record("list_experiments")?;
        let mut items: Vec<Experiment> = inner
            .experiments
            .iter()
            .filter(|e| e.notebook_id == notebook_id && criteria.matches(e))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn create_experiment(&self, new: &NewExperiment) -> Result<Experiment, ApiError> {
        let mut inner = self.lock();
        inner.record("create_experiment")?;
        let id = inner.next_id();
        let experiment = Experiment {
            id,
            notebook_id: new.notebook_id,
            title: new.title.clone(),
            date: new.date.clone(),
            content: new.content.clone(),
            reaction_image: new.reaction_image.clone(),
            created_at: "2024-01-01T00:00:00".to_owned(),
        };
        inner.experiments.push(experiment.clone());
        Ok(experiment)
    }

    async fn update_experiment(&self, id: ExperimentId, patch: &ExperimentPatch) -> Result<Experiment, ApiError> {
        let mut inner = self.lock();
        inner.record("update_experiment")?;
        inner.patches.push(patch.clone());
        let Some(current) = inner.experiments.iter_mut().find(|e| e.id == id) else {
            return Err(ApiError::Server { status: 404, message: "experiment not found".to_owned() });
        };
        current.title.clone_from(&patch.title);
        current.date.clone_from(&patch.date);
        current.content = patch.content.clone();
        if patch.reaction_image.is_some() {
            current.reaction_image.clone_from(&patch.reaction_image);
        }
        Ok(current.clone())
    }

    async fn delete_experiment(&self, id: ExperimentId) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.record("delete_experiment")?;
        inner.experiments.retain(|e| e.id != id);
        Ok(())
    }

    async fn upload_image(&self, image: &ImageUpload) -> Result<String, ApiError> {
        let mut inner = self.lock();
        inner.record("upload_image")?;
        if !image.content_type.starts_with("image/") {
            return Err(ApiError::Server { status: 400, message: "only image files are supported".to_owned() });
        }
        inner.uploads += 1;
        Ok(format!("/static/reactions/upload-{}.png", inner.uploads))
    }

    fn asset_url(&self, path: &str) -> String {
        resolve_url(TEST_BASE, path)
    }
}

pub fn png(name: &str) -> ImageUpload {
    ImageUpload { file_name: name.to_owned(), content_type: "image/png".to_owned(), bytes: vec![0x89, b'P', b'N', b'G'] }
}

/// Widget double holding raw HTML.
#[derive(Default)]
pub struct MemoryEditor {
    html: RefCell<String>,
}

impl MemoryEditor {
    /// Editor whose document is exactly `html`, as if typed by the user.
    pub fn typed(html: &str) -> Self {
        Self { html: RefCell::new(html.to_owned()) }
    }

    pub fn raw(&self) -> String {
        self.html.borrow().clone()
    }
}

impl RichTextEditor for MemoryEditor {
    fn text(&self) -> String {
        strip_tags(&self.html.borrow()).replace("&nbsp;", " ")
    }

    fn html(&self) -> String {
        let html = self.html.borrow();
        if html.is_empty() { "<p><br></p>".to_owned() } else { html.clone() }
    }

    fn clear(&self) {
        self.html.borrow_mut().clear();
    }

    fn paste_html(&self, html: &str) {
        self.html.borrow_mut().push_str(&normalize_whitespace(html));
    }
}

pub fn memory_fields() -> RichFields<MemoryEditor> {
    RichFields::new(|_| Some(MemoryEditor::default()))
}

/// Collapse whitespace runs and drop whitespace between tags.
pub fn normalize_whitespace(html: &str) -> String {
    let collapsed = html.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("> <", "><").trim().to_owned()
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Confirmation double with a fixed answer that records every prompt.
pub struct ScriptedConfirm {
    answer: bool,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn accept() -> Self {
        Self { answer: true, prompts: RefCell::new(Vec::new()) }
    }

    pub fn decline() -> Self {
        Self { answer: false, prompts: RefCell::new(Vec::new()) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.answer
    }
}
