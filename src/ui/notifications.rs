// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toast notifications.
//!
//! Fixed-position stack in the top-right corner, auto-dismissing after a
//! configured delay. The queue is owned by the application and handed to
//! whichever screen needs to report something.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

struct Toast {
    message: String,
    kind: ToastKind,
    born: Instant,
}

pub struct Toasts {
    queue: Vec<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: Vec::new(),
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Info);
    }

    fn push(&mut self, message: String, kind: ToastKind) {
        log::info!("toast: {message}");
        self.queue.push(Toast {
            message,
            kind,
            born: Instant::now(),
        });
    }

    /// Drop expired toasts and draw the remainder.
    pub fn show(&mut self, ctx: &egui::Context) {
        let ttl = self.ttl;
        self.queue.retain(|t| t.born.elapsed() < ttl);
        if self.queue.is_empty() {
            return;
        }

        let anchor = ctx.screen_rect().right_top() + egui::vec2(-16.0, 16.0);
        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Tooltip)
            .fixed_pos(anchor)
            .pivot(egui::Align2::RIGHT_TOP)
            .show(ctx, |ui| {
                for toast in &self.queue {
                    let (accent, icon) = match toast.kind {
                        ToastKind::Success => (egui::Color32::from_rgb(70, 160, 90), "✔"),
                        ToastKind::Error => (egui::Color32::from_rgb(190, 70, 70), "✖"),
                        ToastKind::Info => (egui::Color32::from_rgb(80, 120, 190), "ℹ"),
                    };
                    egui::Frame::popup(ui.style())
                        .fill(ui.visuals().extreme_bg_color)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.colored_label(accent, icon);
                                ui.label(&toast.message);
                            });
                        });
                    ui.add_space(4.0);
                }
            });

        // Keep repainting so toasts disappear without user input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
