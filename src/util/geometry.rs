// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides drag-rectangle normalization and transformations
//! between the displayed canvas rect and the fixed 800x600 reference space
//! ROI coordinates are stored in.

use crate::models::roi::{REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Normalize a drag gesture into an origin-and-size rectangle.
///
/// The origin is the minimum corner of the two drag endpoints and the size
/// is the absolute drag extent. Gestures smaller than `min_side` on either
/// axis return `None` and create nothing.
pub fn rect_from_drag(
    start: (f32, f32),
    end: (f32, f32),
    min_side: f32,
) -> Option<(f32, f32, f32, f32)> {
    let width = (end.0 - start.0).abs();
    let height = (end.1 - start.1).abs();
    if width < min_side || height < min_side {
        return None;
    }
    Some((start.0.min(end.0), start.1.min(end.1), width, height))
}

/// Map a screen position inside the canvas rect to reference coordinates.
pub fn screen_to_reference(pos: egui::Pos2, canvas: egui::Rect) -> (f32, f32) {
    (
        (pos.x - canvas.min.x) / canvas.width() * REFERENCE_WIDTH,
        (pos.y - canvas.min.y) / canvas.height() * REFERENCE_HEIGHT,
    )
}

/// Map reference coordinates to a screen position inside the canvas rect.
pub fn reference_to_screen(x: f32, y: f32, canvas: egui::Rect) -> egui::Pos2 {
    egui::pos2(
        canvas.min.x + x / REFERENCE_WIDTH * canvas.width(),
        canvas.min.y + y / REFERENCE_HEIGHT * canvas.height(),
    )
}

/// Map a reference-space rectangle to a screen rect inside the canvas.
pub fn reference_rect_to_screen(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    canvas: egui::Rect,
) -> egui::Rect {
    egui::Rect::from_min_max(
        reference_to_screen(x, y, canvas),
        reference_to_screen(x + width, y + height, canvas),
    )
}

/// Largest 4:3 rect centered inside the available space.
///
/// The canvas keeps the reference aspect ratio so reference coordinates map
/// linearly without distortion.
pub fn fit_canvas_rect(available: egui::Rect) -> egui::Rect {
    let aspect = REFERENCE_WIDTH / REFERENCE_HEIGHT;
    let available_aspect = available.width() / available.height();

    let (width, height) = if available_aspect > aspect {
        (available.height() * aspect, available.height())
    } else {
        (available.width(), available.width() / aspect)
    };

    egui::Rect::from_center_size(available.center(), egui::vec2(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roi::MIN_ROI_SIDE;

    #[test]
    fn test_drag_normalizes_corners() {
        // Dragging up-and-left still yields the min corner and absolute size
        let rect = rect_from_drag((150.0, 120.0), (50.0, 50.0), MIN_ROI_SIDE).unwrap();
        assert_eq!(rect, (50.0, 50.0, 100.0, 70.0));

        let rect = rect_from_drag((50.0, 50.0), (150.0, 120.0), MIN_ROI_SIDE).unwrap();
        assert_eq!(rect, (50.0, 50.0, 100.0, 70.0));
    }

    #[test]
    fn test_small_drags_are_discarded() {
        assert!(rect_from_drag((0.0, 0.0), (9.0, 50.0), MIN_ROI_SIDE).is_none());
        assert!(rect_from_drag((0.0, 0.0), (50.0, 9.0), MIN_ROI_SIDE).is_none());
        assert!(rect_from_drag((0.0, 0.0), (9.0, 9.0), MIN_ROI_SIDE).is_none());
        assert!(rect_from_drag((0.0, 0.0), (10.0, 10.0), MIN_ROI_SIDE).is_some());
    }

    #[test]
    fn test_reference_round_trip() {
        let canvas = egui::Rect::from_min_size(egui::pos2(37.0, 12.0), egui::vec2(640.0, 480.0));
        let (x, y) = screen_to_reference(egui::pos2(357.0, 252.0), canvas);
        let back = reference_to_screen(x, y, canvas);
        assert!((back.x - 357.0).abs() < 0.001);
        assert!((back.y - 252.0).abs() < 0.001);
    }

    #[test]
    fn test_reference_corners() {
        let canvas = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(400.0, 300.0));
        assert_eq!(screen_to_reference(canvas.min, canvas), (0.0, 0.0));
        let (x, y) = screen_to_reference(canvas.max, canvas);
        assert!((x - 800.0).abs() < 0.001);
        assert!((y - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_canvas_keeps_aspect() {
        let wide = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 300.0));
        let rect = fit_canvas_rect(wide);
        assert!((rect.width() / rect.height() - 4.0 / 3.0).abs() < 0.001);
        assert_eq!(rect.height(), 300.0);

        let tall = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 900.0));
        let rect = fit_canvas_rect(tall);
        assert!((rect.width() / rect.height() - 4.0 / 3.0).abs() < 0.001);
        assert_eq!(rect.width(), 400.0);
    }
}
