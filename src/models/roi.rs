// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Region-of-interest data structures.
//!
//! ROI coordinates live in a fixed 800x600 reference canvas, matching the
//! space the backend uses when mapping detected fingertips onto a project.
//! The wire format is the flat `{"type": "rectangle", "x": ..}` object the
//! backend stores in each project's config.

use serde::{Deserialize, Serialize};

/// Width of the reference canvas ROI coordinates are expressed in.
pub const REFERENCE_WIDTH: f32 = 800.0;
/// Height of the reference canvas ROI coordinates are expressed in.
pub const REFERENCE_HEIGHT: f32 = 600.0;
/// Drag gestures smaller than this on either side are discarded.
pub const MIN_ROI_SIDE: f32 = 10.0;

/// Geometry of a region, tagged by shape kind.
///
/// Rectangle is the only kind the backend currently produces; the tagged
/// representation keeps the wire field `type` and leaves room for other
/// shapes with their own hit-test and draw strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RoiShape {
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl RoiShape {
    /// Check whether a reference-space point falls inside the shape.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        match self {
            RoiShape::Rectangle {
                x,
                y,
                width,
                height,
            } => px >= *x && px < x + width && py >= *y && py < y + height,
        }
    }

    /// Bounding box as (x, y, width, height) in reference space.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        match self {
            RoiShape::Rectangle {
                x,
                y,
                width,
                height,
            } => (*x, *y, *width, *height),
        }
    }

    /// Shapes with a degenerate extent cannot be hit or drawn meaningfully.
    pub fn is_valid(&self) -> bool {
        match self {
            RoiShape::Rectangle { width, height, .. } => *width > 0.0 && *height > 0.0,
        }
    }
}

/// A region of interest stored on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub shape: RoiShape,
    #[serde(default)]
    pub audio_file: Option<String>,
}

impl Roi {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.shape.contains(px, py)
    }
}

/// Payload for creating a region; the backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewRoi {
    pub name: String,
    #[serde(flatten)]
    pub shape: RoiShape,
}

/// Find the topmost region containing a reference-space point.
///
/// Regions are drawn in creation order, so the last match wins ties
/// between overlapping regions.
pub fn hit_test(rois: &[Roi], px: f32, py: f32) -> Option<usize> {
    rois.iter().rposition(|r| r.contains(px, py))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_roi(id: &str, x: f32, y: f32, width: f32, height: f32) -> Roi {
        Roi {
            id: id.to_string(),
            name: id.to_string(),
            shape: RoiShape::Rectangle {
                x,
                y,
                width,
                height,
            },
            audio_file: None,
        }
    }

    #[test]
    fn test_contains() {
        let roi = rect_roi("a", 50.0, 50.0, 100.0, 70.0);
        assert!(roi.contains(50.0, 50.0));
        assert!(roi.contains(100.0, 100.0));
        assert!(!roi.contains(150.0, 120.0)); // exclusive far edge
        assert!(!roi.contains(49.9, 60.0));
    }

    #[test]
    fn test_hit_test_topmost_wins() {
        // Two overlapping regions; the later one is drawn on top
        let rois = vec![
            rect_roi("under", 0.0, 0.0, 200.0, 200.0),
            rect_roi("over", 100.0, 100.0, 200.0, 200.0),
        ];
        assert_eq!(hit_test(&rois, 150.0, 150.0), Some(1));
        assert_eq!(hit_test(&rois, 50.0, 50.0), Some(0));
        assert_eq!(hit_test(&rois, 500.0, 500.0), None);
    }

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{
            "id": "abc-123",
            "name": "ROI 1",
            "type": "rectangle",
            "x": 50.0,
            "y": 50.0,
            "width": 100.0,
            "height": 70.0,
            "audio_file": null
        }"#;
        let roi: Roi = serde_json::from_str(json).unwrap();
        assert_eq!(roi.name, "ROI 1");
        assert_eq!(roi.shape.bounds(), (50.0, 50.0, 100.0, 70.0));
        assert!(roi.audio_file.is_none());

        // Re-encoding keeps the flat tagged object the backend expects
        let value: serde_json::Value = serde_json::to_value(&roi).unwrap();
        assert_eq!(value["type"], "rectangle");
        assert_eq!(value["x"], 50.0);
        assert_eq!(value["width"], 100.0);
    }

    #[test]
    fn test_new_roi_payload() {
        let payload = NewRoi {
            name: "ROI 1".to_string(),
            shape: RoiShape::Rectangle {
                x: 50.0,
                y: 50.0,
                width: 100.0,
                height: 70.0,
            },
        };
        let value: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "rectangle");
        assert_eq!(value["name"], "ROI 1");
        assert!(value.get("id").is_none());
    }
}
