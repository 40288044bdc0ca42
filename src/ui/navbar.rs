// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation bar.
//!
//! Highlights the link for the active screen, offers a new-project
//! shortcut, and hides itself while the user scrolls down through the
//! content, reappearing on the first upward scroll past a small dead zone.

use crate::app::ScreenKind;

/// Scroll distance that must accumulate in one direction before the bar
/// hides or reveals.
const SCROLL_DEAD_ZONE: f32 = 24.0;

/// Navigation requested by the user this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    GoProjects,
    GoEditor,
    GoPlay,
    NewProject,
}

pub struct Navbar {
    visible: bool,
    scroll_accum: f32,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            visible: true,
            scroll_accum: 0.0,
        }
    }
}

impl Navbar {
    /// Feed one frame's raw scroll delta into the hide/reveal tracker.
    ///
    /// Scrolling down (negative delta in egui) hides the bar, scrolling up
    /// reveals it; movement inside the dead zone changes nothing, and a
    /// direction change restarts the accumulation.
    pub fn note_scroll(&mut self, delta_y: f32) {
        if delta_y == 0.0 {
            return;
        }
        if self.scroll_accum != 0.0 && self.scroll_accum.signum() != delta_y.signum() {
            self.scroll_accum = 0.0;
        }
        self.scroll_accum += delta_y;
        if self.scroll_accum < -SCROLL_DEAD_ZONE {
            self.visible = false;
            self.scroll_accum = 0.0;
        } else if self.scroll_accum > SCROLL_DEAD_ZONE {
            self.visible = true;
            self.scroll_accum = 0.0;
        }
    }

    /// Draw the bar; `has_project` gates the editor/play links.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        active: ScreenKind,
        has_project: bool,
    ) -> NavAction {
        if !self.visible {
            return NavAction::None;
        }

        let mut action = NavAction::None;
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                ui.label(egui::RichText::new("Touchboard").strong().size(16.0));
                ui.separator();

                if ui
                    .selectable_label(active == ScreenKind::Projects, "Projects")
                    .clicked()
                {
                    action = NavAction::GoProjects;
                }
                if ui
                    .add_enabled(
                        has_project,
                        egui::SelectableLabel::new(active == ScreenKind::Editor, "Editor"),
                    )
                    .clicked()
                {
                    action = NavAction::GoEditor;
                }
                if ui
                    .add_enabled(
                        has_project,
                        egui::SelectableLabel::new(active == ScreenKind::Play, "Play"),
                    )
                    .clicked()
                {
                    action = NavAction::GoPlay;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("＋ New Project").clicked() {
                        action = NavAction::NewProject;
                    }
                });
            });
        });
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_after_dead_zone() {
        let mut navbar = Navbar::default();
        navbar.note_scroll(-10.0);
        assert!(navbar.visible); // still inside the dead zone
        navbar.note_scroll(-20.0);
        assert!(!navbar.visible);
    }

    #[test]
    fn test_reveals_on_scroll_up() {
        let mut navbar = Navbar::default();
        navbar.note_scroll(-40.0);
        assert!(!navbar.visible);
        navbar.note_scroll(10.0);
        assert!(!navbar.visible); // dead zone applies both ways
        navbar.note_scroll(20.0);
        assert!(navbar.visible);
    }

    #[test]
    fn test_direction_change_resets_accumulation() {
        let mut navbar = Navbar::default();
        navbar.note_scroll(-20.0);
        navbar.note_scroll(5.0); // flips direction, restarts the count
        navbar.note_scroll(-20.0);
        assert!(navbar.visible);
        navbar.note_scroll(-10.0);
        assert!(!navbar.visible);
    }
}
