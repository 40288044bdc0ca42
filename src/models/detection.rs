// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Live detection status polled from the backend.

use super::roi::Roi;
use serde::{Deserialize, Serialize};

/// Proximity classification of a detected hand relative to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactState {
    Touch,
    Hover,
    Far,
}

/// A detected hand with its depth measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub contact_state: ContactState,
    #[serde(default)]
    pub is_touching: Option<bool>,
    #[serde(default)]
    pub finger_depth: Option<f64>,
    #[serde(default)]
    pub depth_diff: Option<f64>,
    /// Fingertip position mapped onto the board, in millimeters.
    #[serde(default)]
    pub a4_coord: Option<[f64; 2]>,
}

/// One sample of the backend's detection state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionStatus {
    #[serde(default)]
    pub board: bool,
    #[serde(default)]
    pub detected_markers: Vec<u32>,
    #[serde(default)]
    pub hands: Vec<Hand>,
    #[serde(default)]
    pub roi_touches: Vec<Roi>,
    #[serde(default)]
    pub calibration_progress: Option<f32>,
    /// Calibrated board surface depth in millimeters.
    #[serde(default)]
    pub depth_reference: Option<f64>,
}

impl DetectionStatus {
    /// Count hands per contact state as (touch, hover, far).
    pub fn contact_tallies(&self) -> (usize, usize, usize) {
        let mut tallies = (0, 0, 0);
        for hand in &self.hands {
            match hand.contact_state {
                ContactState::Touch => tallies.0 += 1,
                ContactState::Hover => tallies.1 += 1,
                ContactState::Far => tallies.2 += 1,
            }
        }
        tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_payload() {
        let json = r#"{
            "board": true,
            "detected_markers": [0, 1, 2, 3],
            "hands": [
                {"contact_state": "touch", "is_touching": true,
                 "finger_depth": 512.0, "depth_diff": 3.2, "a4_coord": [105.0, 148.0]},
                {"contact_state": "hover", "depth_diff": 18.0},
                {"contact_state": "far"}
            ],
            "roi_touches": [
                {"id": "r1", "name": "ROI 1", "type": "rectangle",
                 "x": 10.0, "y": 10.0, "width": 50.0, "height": 50.0,
                 "audio_file": "ding.wav"}
            ],
            "depth_reference": 515.0
        }"#;
        let status: DetectionStatus = serde_json::from_str(json).unwrap();
        assert!(status.board);
        assert_eq!(status.detected_markers.len(), 4);
        assert_eq!(status.contact_tallies(), (1, 1, 1));
        assert_eq!(status.roi_touches.len(), 1);
        assert_eq!(status.depth_reference, Some(515.0));
        assert!(status.calibration_progress.is_none());
    }

    #[test]
    fn test_parse_idle_status() {
        // Before the board is found the backend sends a mostly-empty object
        let status: DetectionStatus =
            serde_json::from_str(r#"{"board": false, "hands": [], "detected_markers": []}"#)
                .unwrap();
        assert!(!status.board);
        assert_eq!(status.contact_tallies(), (0, 0, 0));
        assert!(status.roi_touches.is_empty());
    }
}
