use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::state::App;
use crate::api::SyncRequest;

/// How long to wait for input before the timers run again
const TICK_INTERVAL: Duration = Duration::from_millis(250);

impl App {
    /// Wait briefly for input, then advance timers and drain worker events
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        self.tick(Instant::now());
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        if self.tray.open {
            self.handle_tray_keys(key);
        }
    }

    /// Handle keys that work regardless of what is open
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Handle help popup when visible (must be first to block other keys)
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.visible = false;
                }
                _ => {} // Swallow everything else while help is open
            }
            return true;
        }

        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // F1 / ?: Toggle help popup
        if key.code == KeyCode::F(1) || key.code == KeyCode::Char('?') {
            self.help.toggle();
            return true;
        }

        // q: Exit application
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return true;
        }

        // n: Toggle the notification tray; opening it fetches the latest list
        if key.code == KeyCode::Char('n') {
            if self.tray.toggle() {
                self.send_request(SyncRequest::FetchLatest);
            }
            return true;
        }

        false
    }

    /// Handle keys while the notification tray is open
    fn handle_tray_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.tray.close(),
            KeyCode::Char('r') => {
                if self.tray.refresh() {
                    self.send_request(SyncRequest::FetchLatest);
                }
            }
            KeyCode::Char('a') => {
                self.send_request(SyncRequest::MarkAllRead);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
