// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Modal dialogs: blocking alerts and confirmations.
//!
//! A dialog paints a dimmed full-screen backdrop that swallows pointer
//! input, then lays its panel out on top inside the same layer, so nothing
//! underneath can be interacted with until the dialog is dismissed.

/// Outcome of a confirmation dialog for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Pending,
    Confirmed,
    Cancelled,
}

/// Dimmed backdrop plus a centered panel; returns the closure's result.
pub fn overlay<R>(
    ctx: &egui::Context,
    id: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Swallow clicks aimed at whatever is underneath
            ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));

            let panel = egui::Rect::from_center_size(screen.center(), egui::vec2(380.0, 200.0));
            ui.allocate_ui_at_rect(panel, |ui| {
                egui::Frame::window(ui.style())
                    .show(ui, |ui| {
                        ui.set_width(360.0);
                        add_contents(ui)
                    })
                    .inner
            })
            .inner
        })
        .inner
}

/// Blocking error alert; returns true once dismissed.
pub fn alert(ctx: &egui::Context, message: &str) -> bool {
    overlay(ctx, "alert_dialog", |ui| {
        ui.heading("Error");
        ui.separator();
        ui.label(message);
        ui.add_space(12.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    })
}

/// Confirmation dialog with OK/Cancel.
pub fn confirm(ctx: &egui::Context, title: &str, message: &str) -> Choice {
    overlay(ctx, "confirm_dialog", |ui| {
        ui.heading(title);
        ui.separator();
        ui.label(message);
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                return Choice::Cancelled;
            }
            if ui.button("Delete").clicked() {
                return Choice::Confirmed;
            }
            Choice::Pending
        })
        .inner
    })
}
