use crate::api::Notification;

/// Dropdown state: whether it is open and what it currently shows
///
/// The item list is a cache of the last response. It survives closing the
/// tray and failed refreshes; only a fresh response replaces it.
pub struct TrayState {
    pub open: bool,
    /// A fetch is in flight
    pub loading: bool,
    /// A list response has arrived at least once since startup
    pub loaded: bool,
    items: Vec<Notification>,
    max_items: usize,
}

impl TrayState {
    pub fn new(max_items: usize) -> Self {
        Self {
            open: false,
            loading: false,
            loaded: false,
            items: Vec::new(),
            max_items,
        }
    }

    /// Open the tray. Returns true when the caller should start a fetch;
    /// the list is loaded lazily on every open, never by timer.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.loading = true;
        true
    }

    /// Closing keeps the cached items for the next open
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true when the caller should start a fetch
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
            false
        } else {
            self.open()
        }
    }

    /// Manual refresh of the open tray. Returns true when the caller should
    /// start a fetch.
    pub fn refresh(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.loading = true;
        true
    }

    /// A response replaces the item list wholesale
    pub fn apply(&mut self, notifications: Vec<Notification>) {
        self.items = notifications;
        self.loaded = true;
        self.loading = false;
    }

    /// A failed fetch clears the loading flag and nothing else; whatever the
    /// tray showed before stays on screen.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// Cached items capped to the display limit, server order preserved
    pub fn visible_items(&self) -> &[Notification] {
        let shown = self.items.len().min(self.max_items);
        &self.items[..shown]
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
