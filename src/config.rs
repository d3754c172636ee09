//! Configuration handling for the TUI

use crate::api::DEFAULT_API_BASE;
use crate::state::SuccessNotification;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the API origin
pub const API_BASE_ENV: &str = "CLAVISNOVA_API_BASE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// API origin
    pub api_base: Option<String>,
    /// Seconds the success notification stays open
    pub notification_secs: Option<u64>,
    /// Client-side request timeout in seconds; none by default
    pub request_timeout_secs: Option<u64>,
    /// Log file path
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "clavisnova", "clavisnova-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment overrides
    pub fn with_env(self) -> Self {
        self.with_api_base_override(std::env::var(API_BASE_ENV).ok())
    }

    fn with_api_base_override(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base.filter(|b| !b.trim().is_empty()) {
            self.api_base = Some(base);
        }
        self
    }

    /// Effective API origin
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Effective success notification duration
    pub fn notification_duration(&self) -> Duration {
        self.notification_secs
            .map(Duration::from_secs)
            .unwrap_or(SuccessNotification::DEFAULT_DURATION)
    }

    /// Effective request timeout
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Effective log file: configured path, else the data dir, else none
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join("clavisnova-tui.log"))
        })
    }
}
