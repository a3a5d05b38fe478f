use std::time::{Duration, Instant};

/// Banner category; decides the color, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
}

/// One transient banner line
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    deadline: Instant,
}

impl Alert {
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Active banners, each with its own dismissal deadline
///
/// There is no manual dismissal: every banner leaves on its own once its
/// time is up, whatever the user does in between.
pub struct AlertState {
    alerts: Vec<Alert>,
    ttl: Duration,
}

impl AlertState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            alerts: Vec::new(),
            ttl,
        }
    }

    /// Show a banner until `now + ttl`
    pub fn raise(&mut self, kind: AlertKind, message: impl Into<String>, now: Instant) {
        self.alerts.push(Alert {
            message: message.into(),
            kind,
            deadline: now + self.ttl,
        });
    }

    /// Drop every banner whose time is up; called once per UI tick
    pub fn expire(&mut self, now: Instant) {
        self.alerts.retain(|alert| !alert.expired(now));
    }

    /// Active banners, oldest first
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Screen lines the banner block needs right now
    pub fn height(&self) -> u16 {
        self.alerts.len() as u16
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
