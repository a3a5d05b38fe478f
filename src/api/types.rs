//! Wire types for the notification endpoints
//!
//! Mirrors the JSON payloads served by the admin portal: the unread counter,
//! the latest-notifications list and the mark-all-read acknowledgment.

use ratatui::style::Color;
use serde::Deserialize;

/// Priority level attached to a notification by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Priority {
    /// Display label shown in the tray (the portal's UI language is German)
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Niedrig",
            Priority::Normal => "Normal",
            Priority::High => "Hoch",
            Priority::Critical => "Kritisch",
        }
    }

    /// Accent color for the tray entry
    pub fn color(&self) -> Color {
        match self {
            Priority::Low => Color::DarkGray,
            Priority::Normal => Color::White,
            Priority::High => Color::Yellow,
            Priority::Critical => Color::Red,
        }
    }
}

/// A single notification as returned by the latest-notifications endpoint
///
/// The server truncates `message` to 100 characters and pre-formats
/// `created_at` as `DD.MM.YYYY HH:MM`, so both are kept as plain strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Human-readable type label (e.g. "Zahlungserinnerung"), already localized
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub requires_acknowledgment: bool,
    #[serde(default)]
    pub acknowledged_at: Option<String>,
}

impl Notification {
    /// Critical notifications that still await acknowledgment get the
    /// strongest visual treatment in the tray.
    pub fn needs_acknowledgment(&self) -> bool {
        self.requires_acknowledgment
            && self.priority == Priority::Critical
            && self.acknowledged_at.is_none()
    }
}

/// Response of the unread-count endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u32,
    /// Critical notifications awaiting acknowledgment; older server versions
    /// omit this field.
    #[serde(default)]
    pub critical_count: u32,
}

/// Response of the latest-notifications endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LatestNotifications {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Response of the mark-all-read endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MarkAllRead {
    pub success: bool,
    #[serde(default)]
    pub updated_count: u32,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
