// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Region editor screen.
//!
//! Owns the current project's regions and the drawing state. New regions
//! are committed through the backend, which assigns ids; name edits and
//! deletions are local mutations, matching what the backend persists on
//! the next write. A failed audio upload reports an error but does not
//! roll back a name edit already applied.

use crate::api::worker::{ApiEvent, ApiWorker, LoadedImage};
use crate::app::Tool;
use crate::models::roi::{NewRoi, Roi, RoiShape, MIN_ROI_SIDE};
use crate::ui::canvas::{self, CanvasAction, DragState};
use crate::ui::{dialogs, notifications::Toasts, toolbar};
use crate::util::geometry;

/// State of the region edit modal.
struct EditModal {
    roi_index: usize,
    name: String,
}

pub struct EditorScreen {
    project_id: String,
    project_name: String,
    rois: Vec<Roi>,
    background_image: Option<String>,
    background: Option<egui::TextureHandle>,
    loaded: bool,
    selected: Option<usize>,
    tool: Tool,
    drag: Option<DragState>,
    edit_modal: Option<EditModal>,
    confirm_delete: Option<usize>,
}

impl EditorScreen {
    pub fn new(project_id: String, worker: &ApiWorker) -> Self {
        // The backend has no single-project endpoint; reload the collection
        // and pick out the current project when it arrives.
        worker.list_projects();
        Self {
            project_id,
            project_name: String::new(),
            rois: Vec::new(),
            background_image: None,
            background: None,
            loaded: false,
            selected: None,
            tool: Tool::Select,
            drag: None,
            edit_modal: None,
            confirm_delete: None,
        }
    }

    pub fn handle_event(
        &mut self,
        event: &ApiEvent,
        worker: &ApiWorker,
        ctx: &egui::Context,
        toasts: &mut Toasts,
    ) {
        match event {
            ApiEvent::ProjectsLoaded(projects) => {
                match projects.iter().find(|p| p.id == self.project_id) {
                    Some(project) => {
                        self.project_name = project.name.clone();
                        self.rois = project.rois.clone();
                        self.background_image = project.background_image.clone();
                        if let Some(filename) = &self.background_image {
                            worker.load_background(self.project_id.clone(), filename.clone());
                        }
                    }
                    None => {
                        toasts.error("Project not found on the server");
                    }
                }
                self.loaded = true;
            }
            ApiEvent::RoiCreated(roi) => {
                log::info!("Added region {} ({}), total: {}", roi.name, roi.id, self.rois.len() + 1);
                self.rois.push(roi.clone());
            }
            ApiEvent::BackgroundUploaded { filename } => {
                self.background_image = Some(filename.clone());
                worker.load_background(self.project_id.clone(), filename.clone());
                toasts.success("Background image uploaded");
            }
            ApiEvent::BackgroundLoaded { filename, image } => {
                self.background = Some(make_texture(ctx, filename, image));
            }
            ApiEvent::AudioUploaded { roi_id, filename } => {
                if let Some(roi) = self.rois.iter_mut().find(|r| &r.id == roi_id) {
                    roi.audio_file = Some(filename.clone());
                }
                toasts.success("Audio clip attached");
            }
            ApiEvent::ExportFinished(result) => {
                let name = result.filename.as_deref().unwrap_or("export");
                if let Some(url) = &result.download_url {
                    log::info!("Export available at {url}");
                }
                toasts.success(format!("Exported {name}"));
            }
            _ => {}
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, worker: &ApiWorker, toasts: &mut Toasts) {
        self.show_modals(ctx, worker, toasts);

        let toolbar_action = egui::TopBottomPanel::top("editor_toolbar")
            .show(ctx, |ui| toolbar::show(ui, &mut self.tool))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::UploadBackground => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "webp"])
                    .pick_file()
                {
                    worker.upload_background(self.project_id.clone(), path);
                }
            }
            toolbar::ToolbarAction::Export => {
                worker.export_project(self.project_id.clone(), 800, 600);
            }
            toolbar::ToolbarAction::None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.loaded {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.project_name).strong());
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} regions", self.rois.len())).weak(),
                );
            });

            let action = canvas::show(
                ui,
                &self.background,
                &self.rois,
                self.selected,
                self.tool,
                &self.drag,
            );
            self.apply_canvas_action(action, worker);
        });
    }

    fn apply_canvas_action(&mut self, action: CanvasAction, worker: &ApiWorker) {
        match action {
            CanvasAction::DragStarted(point) => {
                self.drag = Some(DragState {
                    start: point,
                    current: point,
                });
            }
            CanvasAction::DragMoved(point) => {
                if let Some(drag) = &mut self.drag {
                    drag.current = point;
                }
            }
            CanvasAction::DragFinished => {
                if let Some(drag) = self.drag.take() {
                    self.commit_drag(drag, worker);
                }
            }
            CanvasAction::RoiClicked(idx) => {
                self.selected = Some(idx);
                self.edit_modal = Some(EditModal {
                    roi_index: idx,
                    name: self.rois[idx].name.clone(),
                });
            }
            CanvasAction::ClickedEmpty => {
                self.selected = None;
            }
            CanvasAction::None => {}
        }
    }

    /// Normalize the finished drag and send it to the backend, discarding
    /// gestures below the minimum size.
    fn commit_drag(&mut self, drag: DragState, worker: &ApiWorker) {
        let Some((x, y, width, height)) =
            geometry::rect_from_drag(drag.start, drag.current, MIN_ROI_SIDE)
        else {
            log::debug!("Discarded drag below minimum size");
            return;
        };

        let roi = NewRoi {
            name: format!("ROI {}", self.rois.len() + 1),
            shape: RoiShape::Rectangle {
                x,
                y,
                width,
                height,
            },
        };
        worker.create_roi(self.project_id.clone(), roi);
    }

    fn show_modals(&mut self, ctx: &egui::Context, worker: &ApiWorker, toasts: &mut Toasts) {
        // Delete confirmation takes precedence over the edit modal
        if let Some(idx) = self.confirm_delete {
            match dialogs::confirm(ctx, "Delete region", "Remove this region and its audio link?") {
                dialogs::Choice::Confirmed => {
                    if idx < self.rois.len() {
                        let removed = self.rois.remove(idx);
                        log::info!("Deleted region {}, total: {}", removed.name, self.rois.len());
                        toasts.info(format!("Deleted {}", removed.name));
                    }
                    self.selected = None;
                    self.confirm_delete = None;
                }
                dialogs::Choice::Cancelled => self.confirm_delete = None,
                dialogs::Choice::Pending => {}
            }
            return;
        }

        let Some(modal) = &mut self.edit_modal else {
            return;
        };
        if modal.roi_index >= self.rois.len() {
            self.edit_modal = None;
            return;
        }

        enum ModalOutcome {
            Open,
            Save,
            Cancel,
            Delete,
        }

        let roi_index = modal.roi_index;
        let audio_file = self.rois[roi_index].audio_file.clone();
        let mut upload_audio = false;

        let outcome = dialogs::overlay(ctx, "edit_roi_dialog", |ui| {
            let mut outcome = ModalOutcome::Open;
            ui.heading("Edit Region");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut modal.name);
            });

            ui.horizontal(|ui| {
                ui.label("Audio:");
                match &audio_file {
                    Some(file) => ui.label(file),
                    None => ui.label(egui::RichText::new("none").weak()),
                };
                if ui.button("Upload Audio…").clicked() {
                    upload_audio = true;
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    outcome = ModalOutcome::Save;
                }
                if ui.button("Cancel").clicked() {
                    outcome = ModalOutcome::Cancel;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        outcome = ModalOutcome::Delete;
                    }
                });
            });
            outcome
        });

        if upload_audio {
            // Name edit is applied immediately; an upload failure alerts
            // without undoing it
            self.rois[roi_index].name = modal.name.clone();
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Audio", &["wav", "mp3", "ogg", "m4a"])
                .pick_file()
            {
                worker.upload_audio(
                    self.project_id.clone(),
                    self.rois[roi_index].id.clone(),
                    path,
                );
            }
            return;
        }

        match outcome {
            ModalOutcome::Save => {
                self.rois[roi_index].name = modal.name.trim().to_string();
                self.edit_modal = None;
            }
            ModalOutcome::Cancel => {
                self.edit_modal = None;
            }
            ModalOutcome::Delete => {
                self.confirm_delete = Some(roi_index);
                self.edit_modal = None;
            }
            ModalOutcome::Open => {}
        }
    }
}

fn make_texture(
    ctx: &egui::Context,
    filename: &str,
    image: &LoadedImage,
) -> egui::TextureHandle {
    let size = [image.width as usize, image.height as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
    ctx.load_texture(filename, color_image, egui::TextureOptions::LINEAR)
}
