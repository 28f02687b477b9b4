use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::dashboard::StatPollerConfig;
use crate::notifications::NotificationConfig;
use crate::toast_log::TOAST_LOG_FILE;

pub const SETTINGS_FILE: &str = "settings.json";

/// Environment variable overriding [`Settings::base_url`].
pub const BASE_URL_ENV: &str = "ASSET_DASHBOARD_URL";

fn default_base_url() -> String {
    "http://127.0.0.1:5000".into()
}

fn default_stats_interval() -> u64 {
    30
}

fn default_activities_interval() -> u64 {
    60
}

fn default_notifications_interval() -> u64 {
    60
}

fn default_request_timeout() -> u64 {
    10
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    5.0
}

fn default_toast_log() -> Option<String> {
    Some(TOAST_LOG_FILE.into())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Root URL of the asset management server. Endpoint paths are joined
    /// onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds between dashboard counter refreshes.
    #[serde(default = "default_stats_interval")]
    pub stats_interval_secs: u64,
    /// Seconds between recent activity refreshes.
    #[serde(default = "default_activities_interval")]
    pub activities_interval_secs: u64,
    /// Seconds between unread count and maintenance alert checks.
    #[serde(default = "default_notifications_interval")]
    pub notifications_interval_secs: u64,
    /// Per-request timeout for the HTTP client.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of every log line.
    #[serde(default)]
    pub log_file: Option<String>,
    /// File every raised toast is appended to. `null` disables the log.
    #[serde(default = "default_toast_log")]
    pub toast_log: Option<String>,
    /// Last known window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(i32, i32)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            stats_interval_secs: default_stats_interval(),
            activities_interval_secs: default_activities_interval(),
            notifications_interval_secs: default_notifications_interval(),
            request_timeout_secs: default_request_timeout(),
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            debug_logging: false,
            log_file: None,
            toast_log: default_toast_log(),
            window_size: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields the
    /// defaults; the base URL can be overridden through [`BASE_URL_ENV`].
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let mut settings = Self::read(path)?;
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!("base url overridden by {BASE_URL_ENV}");
                settings.base_url = url;
            }
        }
        Ok(settings)
    }

    /// Settings exactly as stored in `path`, without environment overrides.
    pub fn read(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn stat_poller_config(&self) -> StatPollerConfig {
        StatPollerConfig {
            stats_interval: Duration::from_secs(self.stats_interval_secs.max(1)),
            activities_interval: Duration::from_secs(self.activities_interval_secs.max(1)),
            ..StatPollerConfig::default()
        }
    }

    pub fn notification_config(&self) -> NotificationConfig {
        NotificationConfig {
            check_interval: Duration::from_secs(self.notifications_interval_secs.max(1)),
            toast_duration: Duration::from_secs_f32(self.toast_duration.max(0.0).min(3600.0)),
            enable_toasts: self.enable_toasts,
            toast_log: self.toast_log.as_ref().map(PathBuf::from),
        }
    }
}
