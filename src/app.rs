// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! One screen is active at a time; switching screens replaces the screen
//! state wholesale, the way a page navigation would. Backend responses
//! arrive over the worker channel and are drained once per frame, then
//! routed to the active screen. Failed requests queue up as blocking
//! alerts.

use crate::api::client::ApiClient;
use crate::api::worker::{ApiEvent, ApiWorker};
use crate::config::AppConfig;
use crate::ui::editor::EditorScreen;
use crate::ui::navbar::{NavAction, Navbar};
use crate::ui::notifications::Toasts;
use crate::ui::play::PlayScreen;
use crate::ui::projects::{ProjectsAction, ProjectsScreen};
use crate::ui::dialogs;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Current drawing tool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Rectangle,
}

/// Which screen is active, for navigation highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Projects,
    Editor,
    Play,
}

enum Screen {
    Projects(ProjectsScreen),
    Editor(EditorScreen),
    Play(PlayScreen),
}

impl Screen {
    fn kind(&self) -> ScreenKind {
        match self {
            Screen::Projects(_) => ScreenKind::Projects,
            Screen::Editor(_) => ScreenKind::Editor,
            Screen::Play(_) => ScreenKind::Play,
        }
    }
}

/// Requested screen change, applied after the frame's UI has run.
enum Switch {
    None,
    Projects { focus_create: bool },
    Editor(String),
    Play(String),
}

/// Main application state.
pub struct TouchboardApp {
    config: AppConfig,
    worker: ApiWorker,
    events: Receiver<ApiEvent>,
    screen: Screen,
    /// Project the editor/play links navigate to.
    current_project: Option<String>,
    navbar: Navbar,
    toasts: Toasts,
    /// Pending blocking alerts, shown one at a time.
    alerts: VecDeque<String>,
}

impl TouchboardApp {
    /// Create the application and kick off the initial project fetch.
    pub fn new(config: AppConfig, ctx: &egui::Context) -> Self {
        let client = ApiClient::new(&config.server_url);
        let (worker, events) = ApiWorker::new(client, ctx.clone());
        let toasts = Toasts::new(Duration::from_millis(config.toast_duration_ms));
        let screen = Screen::Projects(ProjectsScreen::new(&worker));

        Self {
            config,
            worker,
            events,
            screen,
            current_project: None,
            navbar: Navbar::default(),
            toasts,
            alerts: VecDeque::new(),
        }
    }

    /// Route completed backend work to the active screen.
    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            match &event {
                ApiEvent::Failed(message) => {
                    self.alerts.push_back(message.clone());
                    continue;
                }
                ApiEvent::AudioTriggered | ApiEvent::VolumeSet | ApiEvent::AudioStopped => {
                    continue;
                }
                _ => {}
            }
            match &mut self.screen {
                Screen::Projects(screen) => screen.handle_event(&event, &mut self.toasts),
                Screen::Editor(screen) => {
                    screen.handle_event(&event, &self.worker, ctx, &mut self.toasts)
                }
                Screen::Play(screen) => screen.handle_event(&event, &self.worker),
            }
        }
    }

    fn apply_switch(&mut self, switch: Switch) {
        match switch {
            Switch::None => {}
            Switch::Projects { focus_create } => {
                if let (Screen::Projects(screen), true) = (&mut self.screen, focus_create) {
                    screen.focus_create_field();
                    return;
                }
                log::info!("Switching to projects screen");
                let mut screen = ProjectsScreen::new(&self.worker);
                if focus_create {
                    screen.focus_create_field();
                }
                self.screen = Screen::Projects(screen);
            }
            Switch::Editor(project_id) => {
                log::info!("Switching to editor for project {project_id}");
                self.current_project = Some(project_id.clone());
                self.screen = Screen::Editor(EditorScreen::new(project_id, &self.worker));
            }
            Switch::Play(project_id) => {
                log::info!("Switching to play for project {project_id}");
                self.current_project = Some(project_id.clone());
                // Dropping the previous screen stops its polling loop
                self.screen = Screen::Play(PlayScreen::new(
                    project_id,
                    Duration::from_millis(self.config.poll_interval_ms),
                ));
            }
        }
    }
}

impl eframe::App for TouchboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        // Navbar hide/reveal follows the scroll direction
        self.navbar.note_scroll(ctx.input(|i| i.raw_scroll_delta.y));

        let mut switch = Switch::None;
        let nav_action = self
            .navbar
            .show(ctx, self.screen.kind(), self.current_project.is_some());
        match nav_action {
            NavAction::GoProjects => {
                switch = Switch::Projects {
                    focus_create: false,
                }
            }
            NavAction::NewProject => switch = Switch::Projects { focus_create: true },
            NavAction::GoEditor => {
                if let Some(id) = &self.current_project {
                    switch = Switch::Editor(id.clone());
                }
            }
            NavAction::GoPlay => {
                if let Some(id) = &self.current_project {
                    switch = Switch::Play(id.clone());
                }
            }
            NavAction::None => {}
        }

        match &mut self.screen {
            Screen::Projects(screen) => {
                match screen.show(ctx, &self.worker, &mut self.toasts) {
                    ProjectsAction::OpenEditor(id) => switch = Switch::Editor(id),
                    ProjectsAction::OpenPlay(id) => switch = Switch::Play(id),
                    ProjectsAction::None => {}
                }
            }
            Screen::Editor(screen) => screen.show(ctx, &self.worker, &mut self.toasts),
            Screen::Play(screen) => screen.show(ctx, &self.worker),
        }

        // Blocking failure alert, one at a time, drawn over everything
        if let Some(message) = self.alerts.front() {
            if dialogs::alert(ctx, message) {
                self.alerts.pop_front();
            }
        }

        self.apply_switch(switch);
        self.toasts.show(ctx);
    }
}
