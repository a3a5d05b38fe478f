use std::time::Instant;

use crate::alert::AlertKind;
use crate::api::{SyncEvent, SyncRequest};

use super::state::App;

impl App {
    /// Advance timers and apply everything the worker sent since the last tick
    pub fn tick(&mut self, now: Instant) {
        self.alerts.expire(now);
        if self.badge.poll_due(now) {
            self.send_request(SyncRequest::FetchUnreadCount);
        }
        self.drain_sync_events(now);
    }

    /// Apply all pending worker events without blocking
    fn drain_sync_events(&mut self, now: Instant) {
        let Some(rx) = &self.event_rx else {
            return;
        };

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        for event in events {
            self.apply_sync_event(event, now);
        }
    }

    fn apply_sync_event(&mut self, event: SyncEvent, now: Instant) {
        match event {
            SyncEvent::UnreadCount(count) => self.badge.apply(count),
            SyncEvent::Latest(notifications) => self.tray.apply(notifications),
            SyncEvent::MarkedAllRead(response) => {
                if response.success {
                    let message = marked_read_message(response.updated_count);
                    self.alerts.raise(AlertKind::Success, message, now);
                    self.send_request(SyncRequest::FetchUnreadCount);
                    if self.tray.refresh() {
                        self.send_request(SyncRequest::FetchLatest);
                    }
                } else {
                    log::warn!("Server declined to mark notifications as read");
                }
            }
            SyncEvent::Failed { request, message } => {
                log::debug!("Keeping last known state after failed {request:?}: {message}");
                if request == SyncRequest::FetchLatest {
                    self.tray.fetch_failed();
                }
            }
        }
    }
}

/// Banner text for a completed mark-all-read
fn marked_read_message(updated_count: u32) -> String {
    if updated_count == 1 {
        "1 Benachrichtigung als gelesen markiert".to_string()
    } else {
        format!("{updated_count} Benachrichtigungen als gelesen markiert")
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod sync_tests;
