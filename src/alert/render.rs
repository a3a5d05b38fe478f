use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{Alert, AlertKind, AlertState};

/// Build the full-width banner line for one alert
pub fn alert_line(alert: &Alert) -> Line<'static> {
    let style = match alert.kind {
        AlertKind::Info => Style::default().fg(Color::White).bg(Color::Blue),
        AlertKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
    };

    Line::from(Span::styled(format!(" {} ", alert.message), style)).style(style)
}

/// Render the banner block, one line per active alert
pub fn render_alerts(state: &AlertState, frame: &mut Frame, area: Rect) {
    if state.is_empty() {
        return;
    }

    let lines: Vec<Line> = state.alerts().iter().map(alert_line).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
