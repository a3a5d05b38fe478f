use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use super::state::BadgeState;

/// Badge fragment for the header line
///
/// Empty while nothing is unread; the header line simply has no badge then.
pub fn badge_spans(state: &BadgeState) -> Vec<Span<'static>> {
    if !state.is_visible() {
        return Vec::new();
    }

    let accent = if state.is_critical() {
        Color::Red
    } else {
        Color::Blue
    };

    vec![Span::styled(
        format!(" {} ", state.unread),
        Style::default()
            .fg(Color::White)
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    )]
}

/// Status-line readout of the last successful sync
pub fn sync_status_span(state: &BadgeState) -> Span<'static> {
    let text = match &state.last_synced {
        Some(at) => format!("Stand {}", at.format("%H:%M:%S")),
        None => "Noch nicht synchronisiert".to_string(),
    };

    Span::styled(text, Style::default().fg(Color::DarkGray))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
