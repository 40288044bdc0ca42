// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list screen.
//!
//! Fetches the collection once on entry and renders a card per project.
//! Creation appends the server-returned record; deletion patches the local
//! list only after the backend confirms.

use crate::api::worker::{ApiEvent, ApiWorker};
use crate::models::project::Project;
use crate::ui::{dialogs, notifications::Toasts};

/// Navigation requested from a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsAction {
    None,
    OpenEditor(String),
    OpenPlay(String),
}

pub struct ProjectsScreen {
    /// None until the first fetch answers.
    projects: Option<Vec<Project>>,
    new_name: String,
    focus_create: bool,
    /// Project id waiting for delete confirmation.
    confirm_delete: Option<String>,
}

impl ProjectsScreen {
    pub fn new(worker: &ApiWorker) -> Self {
        worker.list_projects();
        Self {
            projects: None,
            new_name: String::new(),
            focus_create: false,
            confirm_delete: None,
        }
    }

    /// Put the cursor in the create field (new-project navbar shortcut).
    pub fn focus_create_field(&mut self) {
        self.focus_create = true;
    }

    pub fn handle_event(&mut self, event: &ApiEvent, toasts: &mut Toasts) {
        match event {
            ApiEvent::ProjectsLoaded(projects) => {
                self.projects = Some(projects.clone());
            }
            ApiEvent::ProjectCreated(project) => {
                log::info!("Created project {} ({})", project.name, project.id);
                toasts.success(format!("Project \"{}\" created", project.name));
                if let Some(list) = &mut self.projects {
                    list.push(project.clone());
                }
            }
            ApiEvent::ProjectDeleted(id) => {
                if let Some(list) = &mut self.projects {
                    apply_deleted(list, id);
                }
                toasts.info("Project deleted");
            }
            _ => {}
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        worker: &ApiWorker,
        toasts: &mut Toasts,
    ) -> ProjectsAction {
        let mut action = ProjectsAction::None;

        // Pending delete confirmation blocks the rest of the screen
        if let Some(id) = self.confirm_delete.clone() {
            match dialogs::confirm(ctx, "Delete project", "Delete this project and all its regions?")
            {
                dialogs::Choice::Confirmed => {
                    worker.delete_project(id);
                    self.confirm_delete = None;
                }
                dialogs::Choice::Cancelled => self.confirm_delete = None,
                dialogs::Choice::Pending => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Projects");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let field = ui.text_edit_singleline(&mut self.new_name);
                if self.focus_create {
                    field.request_focus();
                    self.focus_create = false;
                }
                let submitted =
                    field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Create").clicked() || submitted {
                    let name = self.new_name.trim().to_string();
                    if name.is_empty() {
                        toasts.info("Enter a project name first");
                    } else {
                        worker.create_project(name);
                        self.new_name.clear();
                    }
                }
            });

            ui.add_space(12.0);
            ui.separator();

            match &self.projects {
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.label("Loading projects…");
                    });
                }
                Some(projects) if projects.is_empty() => {
                    // Distinct empty-state view
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.heading(egui::RichText::new("No projects yet").weak());
                        ui.label("Create a project above to start drawing audio regions.");
                    });
                }
                Some(projects) => {
                    let projects = projects.clone();
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for project in &projects {
                            if let Some(card_action) = self.project_card(ui, project) {
                                action = card_action;
                            }
                            ui.add_space(6.0);
                        }
                    });
                }
            }
        });

        action
    }

    fn project_card(&mut self, ui: &mut egui::Ui, project: &Project) -> Option<ProjectsAction> {
        let mut action = None;
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&project.name).strong().size(15.0));
                    ui.label(
                        egui::RichText::new(format!(
                            "{} regions · created {}",
                            project.rois.len(),
                            project.created_at
                        ))
                        .weak()
                        .size(11.0),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        self.confirm_delete = Some(project.id.clone());
                    }
                    if ui.button("Play").clicked() {
                        action = Some(ProjectsAction::OpenPlay(project.id.clone()));
                    }
                    if ui.button("Edit").clicked() {
                        action = Some(ProjectsAction::OpenEditor(project.id.clone()));
                    }
                });
            });
        });
        action
    }
}

/// Remove a project from the local list once the backend confirmed.
fn apply_deleted(projects: &mut Vec<Project>, id: &str) {
    projects.retain(|p| p.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("project {id}"),
            created_at: "2025-06-01T10:30:00".to_string(),
            background_image: None,
            rois: Vec::new(),
        }
    }

    #[test]
    fn test_delete_patches_only_matching_project() {
        let mut projects = vec![project("a"), project("b"), project("c")];
        apply_deleted(&mut projects, "b");
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);

        // Unknown ids leave the list untouched
        apply_deleted(&mut projects, "zz");
        assert_eq!(projects.len(), 2);
    }
}
