// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the admin portal
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    /// Django session cookie value; without it the portal answers API calls
    /// with a redirect to its login page.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Token matching the csrftoken cookie, required for the mark-all-read POST
    #[serde(default)]
    pub csrf_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_server_url(),
            session_id: None,
            csrf_token: None,
        }
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

/// Timer settings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PollConfig {
    /// Seconds between unread-count polls
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Seconds an alert banner stays on screen
    #[serde(default = "default_alert_ttl_secs")]
    pub alert_ttl_secs: u64,
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn alert_ttl(&self) -> Duration {
        Duration::from_secs(self.alert_ttl_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            interval_secs: default_interval_secs(),
            alert_ttl_secs: default_alert_ttl_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    30
}

fn default_alert_ttl_secs() -> u64 {
    5
}

/// Tray display settings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UiConfig {
    /// Maximum notifications shown in the tray
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_items: default_max_items(),
        }
    }
}

fn default_max_items() -> usize {
    5
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
