//! `reqwest` implementation of [`RemoteStore`].

use log::{debug, info};
use serde::de::DeserializeOwned;

use super::{
    ApiError, CREATE_FAILED, DELETE_FAILED, LOAD_FAILED, RemoteStore, SAVE_FAILED, UPDATE_FAILED, UPLOAD_FAILED,
    error_detail, resolve_url,
};
use crate::config::ClientConfig;
use crate::filter::FilterCriteria;
use crate::types::{
    Experiment, ExperimentId, ExperimentPatch, ImageUpload, NewExperiment, Notebook, NotebookId, UploadedImage,
};

/// REST client bound to one backend base address.
#[derive(Clone, Debug)]
pub struct HttpStore {
    http: reqwest::Client,
    base: String,
}

impl HttpStore {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { http: reqwest::Client::new(), base: config.api_base.clone() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        resolve_url(&self.base, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder, fallback: &str) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server { status: status.as_u16(), message: error_detail(&body, fallback) })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, fallback).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl RemoteStore for HttpStore {
    async fn list_notebooks(&self) -> Result<Vec<Notebook>, ApiError> {
        debug!("GET /notebooks");
        self.send_json(self.http.get(self.endpoint("/notebooks")), LOAD_FAILED).await
    }

    async fn create_notebook(&self, name: &str) -> Result<Notebook, ApiError> {
        debug!("POST /notebooks");
        let request = self
            .http
            .post(self.endpoint("/notebooks"))
            .json(&serde_json::json!({ "name": name }));
        let notebook: Notebook = self.send_json(request, CREATE_FAILED).await?;
        info!("notebook created: id={}", notebook.id);
        Ok(notebook)
    }

    async fn delete_notebook(&self, id: NotebookId) -> Result<(), ApiError> {
        debug!("DELETE /notebooks/{id}");
        let request = self.http.delete(self.endpoint(&format!("/notebooks/{id}")));
        self.send(request, DELETE_FAILED).await?;
        info!("notebook deleted: id={id}");
        Ok(())
    }

    async fn list_experiments(
        &self,
        notebook_id: NotebookId,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Experiment>, ApiError> {
        let query = criteria.query_pairs(notebook_id);
        debug!("GET /experiments {query:?}");
        let request = self.http.get(self.endpoint("/experiments")).query(&query);
        self.send_json(request, LOAD_FAILED).await
    }

    async fn create_experiment(&self, experiment: &NewExperiment) -> Result<Experiment, ApiError> {
        debug!("POST /experiments notebook_id={}", experiment.notebook_id);
        let request = self.http.post(self.endpoint("/experiments")).json(experiment);
        let created: Experiment = self.send_json(request, SAVE_FAILED).await?;
        info!("experiment created: id={}", created.id);
        Ok(created)
    }

    async fn update_experiment(&self, id: ExperimentId, patch: &ExperimentPatch) -> Result<Experiment, ApiError> {
        debug!("PUT /experiments/{id}");
        let request = self.http.put(self.endpoint(&format!("/experiments/{id}"))).json(patch);
        let updated: Experiment = self.send_json(request, UPDATE_FAILED).await?;
        info!("experiment updated: id={id}");
        Ok(updated)
    }

    async fn delete_experiment(&self, id: ExperimentId) -> Result<(), ApiError> {
        debug!("DELETE /experiments/{id}");
        let request = self.http.delete(self.endpoint(&format!("/experiments/{id}")));
        self.send(request, DELETE_FAILED).await?;
        info!("experiment deleted: id={id}");
        Ok(())
    }

    async fn upload_image(&self, image: &ImageUpload) -> Result<String, ApiError> {
        debug!("POST /upload-reaction-image {image:?}");
        let mut part = reqwest::multipart::Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        if !image.content_type.is_empty() {
            part = part
                .mime_str(&image.content_type)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);
        let request = self.http.post(self.endpoint("/upload-reaction-image")).multipart(form);
        let uploaded: UploadedImage = self.send_json(request, UPLOAD_FAILED).await?;
        Ok(uploaded.url)
    }

    fn asset_url(&self, path: &str) -> String {
        resolve_url(&self.base, path)
    }
}
