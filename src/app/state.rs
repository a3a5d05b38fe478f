use std::sync::mpsc::Receiver;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;

use crate::alert::{AlertKind, AlertState};
use crate::api::{SyncEvent, SyncRequest};
use crate::badge::BadgeState;
use crate::config::Config;
use crate::help::HelpState;
use crate::tray::TrayState;

/// Application state
///
/// Owns the widget states and the channel ends of the sync worker. The
/// channels are optional so tests can drive the app without a worker thread.
pub struct App {
    pub badge: BadgeState,
    pub tray: TrayState,
    pub alerts: AlertState,
    pub help: HelpState,
    /// Server base URL as shown in the header and the startup banner
    pub server_label: String,
    pub should_quit: bool,
    pub request_tx: Option<UnboundedSender<SyncRequest>>,
    pub event_rx: Option<Receiver<SyncEvent>>,
}

impl App {
    pub fn new(config: &Config, server_label: String, now: Instant) -> Self {
        Self {
            badge: BadgeState::new(config.poll.interval(), now),
            tray: TrayState::new(config.ui.max_items),
            alerts: AlertState::new(config.poll.alert_ttl()),
            help: HelpState::new(),
            server_label,
            should_quit: false,
            request_tx: None,
            event_rx: None,
        }
    }

    /// Connect the app to a sync worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SyncRequest>,
        event_rx: Receiver<SyncEvent>,
    ) {
        self.request_tx = Some(request_tx);
        self.event_rx = Some(event_rx);
    }

    /// Queue a request for the sync worker
    ///
    /// Returns true if the request was handed off. A missing or closed
    /// channel only gets logged; the widgets keep their last known state.
    pub fn send_request(&mut self, request: SyncRequest) -> bool {
        if let Some(ref tx) = self.request_tx
            && tx.send(request).is_ok()
        {
            return true;
        }
        log::debug!("Sync request {request:?} dropped, worker not connected");
        false
    }

    /// Show the startup banner; it dismisses itself like every other alert
    pub fn announce_startup(&mut self, now: Instant) {
        let message = format!("Verbunden mit {}", self.server_label);
        self.alerts.raise(AlertKind::Info, message, now);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
