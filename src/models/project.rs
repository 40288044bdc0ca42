// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records as served by the backend.
//!
//! The backend owns the project store; the client only ever holds a
//! transient copy fetched over the collection endpoint.

use super::roi::Roi;
use serde::{Deserialize, Serialize};

/// A named collection of a background image and its regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// ISO-8601 timestamp assigned by the backend; treated as opaque text.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rois: Vec<Roi>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_payload() {
        let json = r#"{
            "id": "1f2e3d4c",
            "name": "Demo",
            "created_at": "2025-06-01T10:30:00",
            "background_image": "bg_20250601_103000.png",
            "rois": [
                {"id": "r1", "name": "ROI 1", "type": "rectangle",
                 "x": 50.0, "y": 50.0, "width": 100.0, "height": 70.0,
                 "audio_file": "clip.wav"}
            ]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Demo");
        assert_eq!(project.background_image.as_deref(), Some("bg_20250601_103000.png"));
        assert_eq!(project.rois.len(), 1);
        assert_eq!(project.rois[0].audio_file.as_deref(), Some("clip.wav"));
    }

    #[test]
    fn test_parse_minimal_payload() {
        // Fresh projects come back with no image and no regions
        let json = r#"{"id": "ab", "name": "New", "created_at": "2025-06-01T10:30:00",
                       "background_image": null, "rois": []}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.background_image.is_none());
        assert!(project.rois.is_empty());
    }
}
