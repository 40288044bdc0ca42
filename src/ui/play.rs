// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Play screen.
//!
//! Polls the detection status on a fixed interval and fires one playback
//! request per touched region per tick for as long as contact persists.
//! The backend owns any deduplication of overlapping playback; the client
//! deliberately does not debounce. Poll failures flip the badges into a
//! connection-error state instead of alerting, and polling keeps going.

use crate::api::worker::{ApiEvent, ApiWorker};
use crate::models::detection::{ContactState, DetectionStatus};
use crate::models::roi::Roi;
use std::time::{Duration, Instant};

/// Issues at most one poll per elapsed interval.
pub struct PollClock {
    interval: Duration,
    last: Option<Instant>,
}

impl PollClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True when a new poll is due at `now`; the first call always fires.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last {
            None => {
                self.last = Some(now);
                true
            }
            Some(last) if now.duration_since(last) >= self.interval => {
                self.last = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Playback requests for one status tick: (roi id, audio file) per touched
/// region carrying a clip. Empty while sound is disabled.
pub fn plan_audio_triggers(touches: &[Roi], sound_enabled: bool) -> Vec<(String, String)> {
    if !sound_enabled {
        return Vec::new();
    }
    touches
        .iter()
        .filter_map(|roi| {
            roi.audio_file
                .as_ref()
                .map(|file| (roi.id.clone(), file.clone()))
        })
        .collect()
}

pub struct PlayScreen {
    project_id: String,
    sound_enabled: bool,
    volume: f32,
    clock: PollClock,
    status: Option<DetectionStatus>,
    connection_error: bool,
}

impl PlayScreen {
    pub fn new(project_id: String, poll_interval: Duration) -> Self {
        Self {
            project_id,
            sound_enabled: false,
            volume: 0.7,
            clock: PollClock::new(poll_interval),
            status: None,
            connection_error: false,
        }
    }

    pub fn handle_event(&mut self, event: &ApiEvent, worker: &ApiWorker) {
        match event {
            ApiEvent::Status(status) => {
                self.connection_error = false;
                for (roi_id, audio_file) in
                    plan_audio_triggers(&status.roi_touches, self.sound_enabled)
                {
                    worker.play_audio(roi_id, audio_file);
                }
                self.status = Some((**status).clone());
            }
            ApiEvent::StatusFailed(message) => {
                log::warn!("status poll failed: {message}");
                self.connection_error = true;
            }
            _ => {}
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, worker: &ApiWorker) {
        // Fixed-interval polling driven by the frame loop
        if self.clock.due(Instant::now()) {
            worker.fetch_status();
        }
        ctx.request_repaint_after(self.clock.interval());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Play");
                ui.separator();
                ui.label(egui::RichText::new(format!("project {}", self.project_id)).weak());
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                // Playback stays muted until explicitly enabled
                ui.checkbox(&mut self.sound_enabled, "Enable sound");
                ui.separator();

                let slider = ui.add(
                    egui::Slider::new(&mut self.volume, 0.0..=1.0).text("Volume"),
                );
                if slider.drag_stopped() {
                    worker.set_volume(self.volume);
                }

                if ui.button("Stop All").clicked() {
                    worker.stop_audio();
                }
            });

            ui.add_space(8.0);
            ui.separator();
            self.status_badges(ui);
            ui.separator();
            self.hand_list(ui);
            self.touch_list(ui);
        });
    }

    fn status_badges(&self, ui: &mut egui::Ui) {
        if self.connection_error {
            ui.colored_label(egui::Color32::RED, "⚠ connection error");
            return;
        }

        let Some(status) = &self.status else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Waiting for detection status…");
            });
            return;
        };

        ui.horizontal(|ui| {
            let board_color = if status.board {
                egui::Color32::from_rgb(70, 160, 90)
            } else {
                egui::Color32::from_rgb(190, 70, 70)
            };
            ui.colored_label(
                board_color,
                format!(
                    "Board {} ({}/4 markers)",
                    if status.board { "✔" } else { "✖" },
                    status.detected_markers.len()
                ),
            );

            ui.separator();
            let (touch, hover, far) = status.contact_tallies();
            ui.label(format!(
                "Hands: {}  (touch {touch} · hover {hover} · far {far})",
                status.hands.len()
            ));

            ui.separator();
            ui.label(format!("Touched regions: {}", status.roi_touches.len()));
        });

        if status.calibration_progress.is_some() || status.depth_reference.is_some() {
            ui.horizontal(|ui| {
                if let Some(progress) = status.calibration_progress {
                    ui.label(format!("Calibrating: {:.0}%", progress * 100.0));
                }
                if let Some(depth) = status.depth_reference {
                    ui.label(
                        egui::RichText::new(format!("surface depth {depth:.0} mm")).weak(),
                    );
                }
            });
        }
    }

    fn hand_list(&self, ui: &mut egui::Ui) {
        let Some(status) = &self.status else {
            return;
        };

        for hand in &status.hands {
            let Some([x, y]) = hand.a4_coord else {
                continue;
            };
            let state = match hand.contact_state {
                ContactState::Touch => "TOUCH",
                ContactState::Hover => "HOVER",
                ContactState::Far => "FAR",
            };
            ui.horizontal(|ui| {
                ui.label(format!("({x:.0}, {y:.0}) mm"));
                if let Some(diff) = hand.depth_diff {
                    ui.label(egui::RichText::new(format!("{diff:.1} mm")).weak());
                }
                ui.label(egui::RichText::new(state).weak());
            });
        }
        if !status.hands.is_empty() {
            ui.separator();
        }
    }

    fn touch_list(&self, ui: &mut egui::Ui) {
        let Some(status) = &self.status else {
            return;
        };

        if status.roi_touches.is_empty() {
            ui.label(egui::RichText::new("No regions touched").weak());
            return;
        }

        for roi in &status.roi_touches {
            let (x, y, width, height) = roi.shape.bounds();
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::YELLOW, "▸");
                ui.label(&roi.name);
                ui.label(
                    egui::RichText::new(format!("({x:.0}, {y:.0}) {width:.0}x{height:.0}"))
                        .weak(),
                );
                match &roi.audio_file {
                    Some(file) => ui.label(egui::RichText::new(format!("♪ {file}")).weak()),
                    None => ui.label(egui::RichText::new("no clip").weak()),
                };
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roi::RoiShape;

    fn touched(id: &str, audio: Option<&str>) -> Roi {
        Roi {
            id: id.to_string(),
            name: id.to_string(),
            shape: RoiShape::Rectangle {
                x: 0.0,
                y: 0.0,
                width: 50.0,
                height: 50.0,
            },
            audio_file: audio.map(str::to_string),
        }
    }

    #[test]
    fn test_one_trigger_per_touched_roi_with_audio() {
        let touches = vec![
            touched("a", Some("a.wav")),
            touched("b", None),
            touched("c", Some("c.wav")),
        ];
        let plays = plan_audio_triggers(&touches, true);
        assert_eq!(
            plays,
            vec![
                ("a".to_string(), "a.wav".to_string()),
                ("c".to_string(), "c.wav".to_string())
            ]
        );
    }

    #[test]
    fn test_no_triggers_while_sound_disabled() {
        let touches = vec![touched("a", Some("a.wav"))];
        assert!(plan_audio_triggers(&touches, false).is_empty());
    }

    #[test]
    fn test_retrigger_on_every_tick() {
        // A continuously touched region fires again on each tick
        let touches = vec![touched("a", Some("a.wav"))];
        for _ in 0..3 {
            assert_eq!(plan_audio_triggers(&touches, true).len(), 1);
        }
    }

    #[test]
    fn test_poll_clock_fires_once_per_interval() {
        let mut clock = PollClock::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(clock.due(t0)); // first call always polls
        assert!(!clock.due(t0 + Duration::from_millis(50)));
        assert!(clock.due(t0 + Duration::from_millis(100)));
        assert!(!clock.due(t0 + Duration::from_millis(150)));
        assert!(clock.due(t0 + Duration::from_millis(210)));
    }
}
