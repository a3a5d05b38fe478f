use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::{alert, badge, help, tray};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(self.alerts.height()), // Banner row, collapses when empty
            Constraint::Length(3),                    // Header with the badge
            Constraint::Min(0),                       // Summary body
            Constraint::Length(1),                    // Status line
        ])
        .split(frame.area());

        alert::render_alerts(&self.alerts, frame, layout[0]);
        self.render_header(frame, layout[1]);
        self.render_body(frame, layout[2]);
        self.render_status_line(frame, layout[3]);

        // Popups draw last so they sit on top of everything else
        tray::render_popup(&self.tray, self.badge.unread, frame, layout[1]);
        help::render_popup(&self.help, frame);
    }

    /// Render the header bar: portal name left, unread badge right
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let badge_spans = badge::badge_spans(&self.badge);
        let badge_width: u16 = badge_spans.iter().map(|span| span.width() as u16).sum();
        let columns =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(badge_width)]).split(inner);

        let title = Line::from(vec![
            Span::styled("Bildungszentrum", Style::default().fg(Color::White).bold()),
            Span::raw("  "),
            Span::styled(self.server_label.as_str(), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(title), columns[0]);

        if badge_width > 0 {
            frame.render_widget(Paragraph::new(Line::from(badge_spans)), columns[1]);
        }
    }

    /// Render the unread summary between header and status line
    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::default()];

        let summary = match (self.badge.synced, self.badge.unread) {
            (false, _) => "Der Posteingang wurde noch nicht abgerufen.".to_string(),
            (true, 0) => "Keine ungelesenen Benachrichtigungen.".to_string(),
            (true, 1) => "1 ungelesene Benachrichtigung.".to_string(),
            (true, n) => format!("{n} ungelesene Benachrichtigungen."),
        };
        lines.push(Line::from(format!("  {summary}")));

        if self.badge.synced && self.badge.critical > 0 {
            lines.push(
                Line::from(format!("  Davon {} kritisch.", self.badge.critical))
                    .style(Style::default().fg(Color::Red)),
            );
        }

        lines.push(Line::default());
        lines.push(
            Line::from("  Druecke n fuer die Benachrichtigungen, ? fuer Hilfe.")
                .style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Render the status line: key hints left, last sync time right
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let status = badge::sync_status_span(&self.badge);
        let status_width = status.width() as u16 + 1;
        let columns =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).split(area);

        let hints = Span::styled(
            " n Benachrichtigungen · ? Hilfe · q Beenden",
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(Paragraph::new(Line::from(hints)), columns[0]);
        frame.render_widget(Paragraph::new(Line::from(status)), columns[1]);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
