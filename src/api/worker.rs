// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background request execution.
//!
//! Every backend call runs on its own spawned thread and reports back over
//! a single mpsc channel the application drains once per frame. Requests
//! are not deduplicated or cancelled; an abandoned response is simply
//! ignored by whichever screen is active when it arrives.

use crate::api::client::{ApiClient, ExportResult};
use crate::models::{detection::DetectionStatus, project::Project, roi::{NewRoi, Roi}};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Decoded RGBA image ready to become an egui texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Completed background work, delivered to the frame loop.
pub enum ApiEvent {
    ProjectsLoaded(Vec<Project>),
    ProjectCreated(Project),
    ProjectDeleted(String),
    RoiCreated(Roi),
    BackgroundUploaded { filename: String },
    BackgroundLoaded { filename: String, image: LoadedImage },
    AudioUploaded { roi_id: String, filename: String },
    ExportFinished(ExportResult),
    Status(Box<DetectionStatus>),
    /// Poll failures degrade the play-screen badges instead of alerting.
    StatusFailed(String),
    AudioTriggered,
    VolumeSet,
    AudioStopped,
    /// Any other failed request; surfaced as a blocking alert.
    Failed(String),
}

/// Handle used by screens to launch backend requests.
pub struct ApiWorker {
    client: ApiClient,
    tx: Sender<ApiEvent>,
    ctx: egui::Context,
}

impl ApiWorker {
    pub fn new(client: ApiClient, ctx: egui::Context) -> (Self, Receiver<ApiEvent>) {
        let (tx, rx) = channel();
        (Self { client, tx, ctx }, rx)
    }

    /// Run a request on a fresh thread; errors become `ApiEvent::Failed`.
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&ApiClient) -> Result<ApiEvent> + Send + 'static,
    {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            let event = job(&client).unwrap_or_else(|e| {
                log::error!("request failed: {e:#}");
                ApiEvent::Failed(format!("{e:#}"))
            });
            let _ = tx.send(event);
            // Wake the frame loop so the event is seen promptly
            ctx.request_repaint();
        });
    }

    pub fn list_projects(&self) {
        self.spawn(|c| Ok(ApiEvent::ProjectsLoaded(c.list_projects()?)));
    }

    pub fn create_project(&self, name: String) {
        self.spawn(move |c| Ok(ApiEvent::ProjectCreated(c.create_project(&name)?)));
    }

    pub fn delete_project(&self, id: String) {
        self.spawn(move |c| {
            c.delete_project(&id)?;
            Ok(ApiEvent::ProjectDeleted(id))
        });
    }

    pub fn create_roi(&self, project_id: String, roi: NewRoi) {
        self.spawn(move |c| Ok(ApiEvent::RoiCreated(c.create_roi(&project_id, &roi)?)));
    }

    /// Read an image from disk and upload it as the project background.
    pub fn upload_background(&self, project_id: String, path: PathBuf) {
        self.spawn(move |c| {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file_name = local_file_name(&path);
            let filename = c.upload_background(&project_id, &file_name, bytes)?;
            log::info!("Uploaded background {filename}");
            Ok(ApiEvent::BackgroundUploaded { filename })
        });
    }

    /// Read an audio clip from disk and attach it to a region.
    pub fn upload_audio(&self, project_id: String, roi_id: String, path: PathBuf) {
        self.spawn(move |c| {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file_name = local_file_name(&path);
            let filename = c.upload_audio(&project_id, &roi_id, &file_name, bytes)?;
            log::info!("Uploaded audio {filename} for region {roi_id}");
            Ok(ApiEvent::AudioUploaded { roi_id, filename })
        });
    }

    /// Download and decode a project background image.
    pub fn load_background(&self, project_id: String, filename: String) {
        self.spawn(move |c| {
            let bytes = c.fetch_project_file(&project_id, &filename)?;
            let decoded = image::load_from_memory(&bytes)
                .with_context(|| format!("decoding {filename}"))?
                .to_rgba8();
            let (width, height) = decoded.dimensions();
            log::info!("Loaded background {filename} ({width}x{height})");
            Ok(ApiEvent::BackgroundLoaded {
                filename,
                image: LoadedImage {
                    width,
                    height,
                    pixels: decoded.into_raw(),
                },
            })
        });
    }

    pub fn export_project(&self, project_id: String, width: u32, height: u32) {
        self.spawn(move |c| {
            Ok(ApiEvent::ExportFinished(c.export_project(
                &project_id,
                width,
                height,
            )?))
        });
    }

    /// Poll the detection status; failures are reported as `StatusFailed`.
    pub fn fetch_status(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            let event = match client.detection_status() {
                Ok(status) => ApiEvent::Status(Box::new(status)),
                Err(e) => ApiEvent::StatusFailed(format!("{e:#}")),
            };
            let _ = tx.send(event);
            ctx.request_repaint();
        });
    }

    pub fn play_audio(&self, roi_id: String, audio_file: String) {
        self.spawn(move |c| {
            c.play_audio(&roi_id, &audio_file)?;
            Ok(ApiEvent::AudioTriggered)
        });
    }

    pub fn set_volume(&self, volume: f32) {
        self.spawn(move |c| {
            c.set_volume(volume)?;
            Ok(ApiEvent::VolumeSet)
        });
    }

    pub fn stop_audio(&self) {
        self.spawn(|c| {
            c.stop_audio()?;
            Ok(ApiEvent::AudioStopped)
        });
    }
}

fn local_file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload.bin".to_string())
}
