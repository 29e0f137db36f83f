// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for Shotsort

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Directory holding unsorted screenshots
    #[serde(default = "default_screenshot_dir")]
    pub screenshot_dir: String,

    /// Path to the app-id override table (JSON)
    #[serde(default = "default_overrides_path")]
    pub overrides_path: String,

    /// Screenshot file extension to pick up
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Steam storefront settings
    #[serde(default)]
    pub steam: SteamConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SteamConfig {
    #[serde(default = "default_steam_url")]
    pub url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_overrides_path() -> String { "overrides.json".to_string() }
fn default_extension() -> String { "png".to_string() }
fn default_steam_url() -> String { "https://store.steampowered.com".to_string() }
fn default_timeout() -> u64 { 30 }

fn default_screenshot_dir() -> String {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Screenshots")
        .join("Steam")
        .to_string_lossy()
        .to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            screenshot_dir: default_screenshot_dir(),
            overrides_path: default_overrides_path(),
            extension: default_extension(),
            steam: SteamConfig::default(),
        }
    }
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            url: default_steam_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::ShotsortError::Config(format!("Failed to parse config: {e}")))?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| crate::ShotsortError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
