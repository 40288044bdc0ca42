// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor drawing canvas.
//!
//! Renders the project background with region overlays and translates
//! pointer gestures into canvas actions. The canvas keeps the 4:3 aspect
//! of the 800x600 reference space; the background image is stretched to
//! fill it.

use crate::app::Tool;
use crate::models::roi::{self, Roi};
use crate::util::geometry;

/// An in-progress rectangle drag, in reference coordinates.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub start: (f32, f32),
    pub current: (f32, f32),
}

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    DragStarted((f32, f32)),
    DragMoved((f32, f32)),
    DragFinished,
    RoiClicked(usize),
    ClickedEmpty,
}

const ROI_COLOR: egui::Color32 = egui::Color32::YELLOW;
const SELECTED_COLOR: egui::Color32 = egui::Color32::LIGHT_BLUE;

/// Display the canvas and handle pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    background: &Option<egui::TextureHandle>,
    rois: &[Roi],
    selected: Option<usize>,
    current_tool: Tool,
    drag: &Option<DragState>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available = ui.available_rect_before_wrap();
    let canvas_rect = geometry::fit_canvas_rect(available);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        let response = ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());
        let painter = ui.painter_at(canvas_rect);

        // Background: image stretched to the canvas, plain gray otherwise
        if let Some(texture) = background {
            painter.image(
                texture.id(),
                canvas_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(55));
            painter.text(
                canvas_rect.center(),
                egui::Align2::CENTER_CENTER,
                "No background image",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(140),
            );
        }

        // Committed regions, in creation order so later ones draw on top
        for (idx, r) in rois.iter().enumerate() {
            if !r.shape.is_valid() {
                continue;
            }
            let color = if selected == Some(idx) {
                SELECTED_COLOR
            } else {
                ROI_COLOR
            };
            draw_roi(&painter, r, canvas_rect, color);
        }

        // Dashed preview of the rectangle being dragged
        if let Some(drag) = drag {
            draw_preview(&painter, drag, canvas_rect);
        }

        let to_reference = |pos: egui::Pos2| {
            let clamped = pos.clamp(canvas_rect.min, canvas_rect.max);
            geometry::screen_to_reference(clamped, canvas_rect)
        };

        match current_tool {
            Tool::Select => {
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let (px, py) = to_reference(pos);
                        action = match roi::hit_test(rois, px, py) {
                            Some(idx) => CanvasAction::RoiClicked(idx),
                            None => CanvasAction::ClickedEmpty,
                        };
                    }
                }
            }
            Tool::Rectangle => {
                if response.drag_started_by(egui::PointerButton::Primary) {
                    if let Some(pos) = response.interact_pointer_pos() {
                        action = CanvasAction::DragStarted(to_reference(pos));
                    }
                } else if response.dragged_by(egui::PointerButton::Primary) {
                    if let Some(pos) = response.interact_pointer_pos() {
                        action = CanvasAction::DragMoved(to_reference(pos));
                    }
                } else if response.drag_stopped_by(egui::PointerButton::Primary) {
                    action = CanvasAction::DragFinished;
                }
            }
        }
    });

    action
}

/// Draw a committed region as a translucent filled rectangle with a border
/// and its name above the top-left corner.
fn draw_roi(painter: &egui::Painter, roi: &Roi, canvas: egui::Rect, color: egui::Color32) {
    let (x, y, width, height) = roi.shape.bounds();
    let rect = geometry::reference_rect_to_screen(x, y, width, height, canvas);

    let fill = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 40);
    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, color));

    painter.text(
        rect.left_top() - egui::vec2(0.0, 4.0),
        egui::Align2::LEFT_BOTTOM,
        &roi.name,
        egui::FontId::proportional(13.0),
        color,
    );
}

fn draw_preview(painter: &egui::Painter, drag: &DragState, canvas: egui::Rect) {
    let p1 = geometry::reference_to_screen(drag.start.0, drag.start.1, canvas);
    let p2 = geometry::reference_to_screen(drag.current.0, drag.current.1, canvas);
    let rect = egui::Rect::from_two_pos(p1, p2);

    let stroke = egui::Stroke::new(1.5, SELECTED_COLOR);
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    for i in 0..4 {
        painter.extend(egui::Shape::dashed_line(
            &[corners[i], corners[(i + 1) % 4]],
            stroke,
            6.0,
            4.0,
        ));
    }
}
