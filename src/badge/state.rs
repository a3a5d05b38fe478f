use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::api::UnreadCount;

/// Last-known unread counters plus the poll timer that refreshes them
pub struct BadgeState {
    pub unread: u32,
    pub critical: u32,
    /// At least one count fetch has succeeded since startup
    pub synced: bool,
    pub last_synced: Option<DateTime<Local>>,
    poll_interval: Duration,
    next_poll: Instant,
}

impl BadgeState {
    /// `next_poll` starts at `now`, so the first due-check fires immediately
    pub fn new(poll_interval: Duration, now: Instant) -> Self {
        Self {
            unread: 0,
            critical: 0,
            synced: false,
            last_synced: None,
            poll_interval,
            next_poll: now,
        }
    }

    /// A successful count fetch overwrites both counters wholesale.
    /// Failures never reach this point, which is what keeps the badge in its
    /// last-known state across network trouble.
    pub fn apply(&mut self, count: UnreadCount) {
        self.unread = count.unread_count;
        self.critical = count.critical_count;
        self.synced = true;
        self.last_synced = Some(Local::now());
    }

    /// The badge shows exactly while something is unread
    pub fn is_visible(&self) -> bool {
        self.unread > 0
    }

    /// Critical notifications push the badge into its alarm color
    pub fn is_critical(&self) -> bool {
        self.critical > 0
    }

    /// Returns true once per poll interval. Rescheduling is relative to `now`
    /// rather than the previous deadline; the portal does not care about a
    /// little drift and this avoids burst catch-up after a suspend.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        if now >= self.next_poll {
            self.next_poll = now + self.poll_interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
