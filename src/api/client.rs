// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Blocking HTTP client for the backend REST surface.
//!
//! All methods block and are meant to be called from worker threads, never
//! from the UI thread. The client is built without a request timeout on
//! purpose: a hung backend leaves the request pending and the UI in its
//! last-rendered state rather than failing over.

use crate::models::{
    detection::DetectionStatus,
    project::Project,
    roi::{NewRoi, Roi},
};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Result of a server-side project export.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Upload endpoints answer with a success flag and the stored filename.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self
            .http
            .get(self.url("/api/projects"))
            .send()
            .context("fetching project list")?;
        Ok(check(response)?.json()?)
    }

    pub fn create_project(&self, name: &str) -> Result<Project> {
        let response = self
            .http
            .post(self.url("/api/projects"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .context("creating project")?;
        Ok(check(response)?.json()?)
    }

    pub fn delete_project(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/projects/{id}")))
            .send()
            .context("deleting project")?;
        check(response)?;
        Ok(())
    }

    pub fn create_roi(&self, project_id: &str, roi: &NewRoi) -> Result<Roi> {
        let response = self
            .http
            .post(self.url(&format!("/api/projects/{project_id}/rois")))
            .json(roi)
            .send()
            .context("creating region")?;
        Ok(check(response)?.json()?)
    }

    /// Upload a background image; returns the filename the server stored.
    pub fn upload_background(
        &self,
        project_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let part = reqwest::blocking::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string());
        let form = reqwest::blocking::multipart::Form::new().part("image", part);
        let response = self
            .http
            .post(self.url(&format!("/api/projects/{project_id}/upload")))
            .multipart(form)
            .send()
            .context("uploading background image")?;
        stored_filename(check(response)?)
    }

    /// Upload an audio clip for a region; returns the stored filename.
    pub fn upload_audio(
        &self,
        project_id: &str,
        roi_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let part = reqwest::blocking::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string());
        let form = reqwest::blocking::multipart::Form::new()
            .part("audio", part)
            .text("roi_id", roi_id.to_string());
        let response = self
            .http
            .post(self.url(&format!("/api/projects/{project_id}/upload-audio")))
            .multipart(form)
            .send()
            .context("uploading audio clip")?;
        stored_filename(check(response)?)
    }

    pub fn export_project(&self, project_id: &str, width: u32, height: u32) -> Result<ExportResult> {
        let response = self
            .http
            .post(self.url(&format!("/api/projects/{project_id}/export")))
            .json(&serde_json::json!({ "width": width, "height": height }))
            .send()
            .context("exporting project")?;
        let result: ExportResult = check(response)?.json()?;
        if !result.success {
            return Err(anyhow!("server reported export failure"));
        }
        Ok(result)
    }

    pub fn detection_status(&self) -> Result<DetectionStatus> {
        let response = self
            .http
            .get(self.url("/api/detection-status"))
            .send()
            .context("fetching detection status")?;
        Ok(check(response)?.json()?)
    }

    pub fn play_audio(&self, roi_id: &str, audio_file: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url("/api/play-audio"))
            .json(&serde_json::json!({ "roi_id": roi_id, "audio_file": audio_file }))
            .send()
            .context("requesting audio playback")?;
        check(response)?;
        Ok(())
    }

    pub fn set_volume(&self, volume: f32) -> Result<()> {
        let response = self
            .http
            .post(self.url("/api/set-volume"))
            .json(&serde_json::json!({ "volume": volume }))
            .send()
            .context("setting volume")?;
        check(response)?;
        Ok(())
    }

    pub fn stop_audio(&self) -> Result<()> {
        let response = self
            .http
            .post(self.url("/api/stop-audio"))
            .send()
            .context("stopping audio")?;
        check(response)?;
        Ok(())
    }

    /// Fetch a project asset (background image) from the static file path.
    pub fn fetch_project_file(&self, project_id: &str, filename: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(self.url(&format!("/projects/{project_id}/{filename}")))
            .send()
            .context("fetching project file")?;
        Ok(check(response)?.bytes()?.to_vec())
    }
}

/// Treat any non-2xx answer the same as a transport failure.
fn check(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(anyhow!("server returned {}", response.status()))
    }
}

/// Unwrap an upload response, folding `success: false` into the error path.
fn stored_filename(response: reqwest::blocking::Response) -> Result<String> {
    let body: UploadResponse = response.json()?;
    if !body.success {
        return Err(anyhow!(
            "upload rejected: {}",
            body.error.unwrap_or_else(|| "unknown error".to_string())
        ));
    }
    body.filename
        .ok_or_else(|| anyhow!("upload succeeded but no filename returned"))
}
