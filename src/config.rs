// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings are read from `touchboard.yaml` in the working directory when
//! present; every field has a default so the file is optional. The backend
//! address can also be overridden with the `TOUCHBOARD_SERVER` environment
//! variable.

use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_FILE: &str = "touchboard.yaml";

/// Runtime configuration for the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the detection backend.
    pub server_url: String,
    /// Detection-status polling interval on the play screen, in milliseconds.
    pub poll_interval_ms: u64,
    /// How long toast notifications stay on screen, in milliseconds.
    pub toast_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            poll_interval_ms: 100,
            toast_duration_ms: 3000,
        }
    }
}

/// Load configuration from disk, falling back to defaults.
pub fn load() -> AppConfig {
    let mut config = read_file(Path::new(CONFIG_FILE)).unwrap_or_default();

    if let Ok(server) = std::env::var("TOUCHBOARD_SERVER") {
        if !server.is_empty() {
            config.server_url = server;
        }
    }

    // A trailing slash would double up when joining endpoint paths
    while config.server_url.ends_with('/') {
        config.server_url.pop();
    }

    config
}

fn read_file(path: &Path) -> Option<AppConfig> {
    if !path.exists() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(text) => match serde_yaml::from_str(&text) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                None
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server_url, "http://localhost:5000");
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("server_url: http://board:8080\n").unwrap();
        assert_eq!(config.server_url, "http://board:8080");
        assert_eq!(config.poll_interval_ms, 100);
    }
}
