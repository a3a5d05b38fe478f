//! Tray popup rendering
//!
//! Drawn as a dropdown anchored under the right end of the header line. The
//! header, divider and footer lines are fixed structure; only the body
//! between them changes with the cached item list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::TrayState;
use crate::api::Notification;
use crate::widgets::popup;

const TRAY_WIDTH: u16 = 56;

const LOADING_TEXT: &str = "Wird geladen ...";
const EMPTY_PLACEHOLDER: &str = "Keine Benachrichtigungen vorhanden";

/// Render the dropdown when it is open
pub fn render_popup(tray: &TrayState, unread: u32, frame: &mut Frame, anchor: Rect) {
    if !tray.open {
        return;
    }

    let width = TRAY_WIDTH.min(frame.area().width);
    let inner_width = width.saturating_sub(2) as usize;

    let lines = build_lines(tray, unread, inner_width);
    let height = lines.len() as u16 + 2;

    let area = popup::popup_below_anchor(frame.area(), anchor, width, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Header and footer stay in place across every refresh; only the body
/// section between the dividers is rebuilt from the cached list.
fn build_lines(tray: &TrayState, unread: u32, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(unread), divider(width)];

    if !tray.loaded {
        // Before the first response the body shows the loading text, even
        // when that first fetch failed; there is nothing truthful to show yet
        lines.push(dim_line(LOADING_TEXT));
    } else if tray.visible_items().is_empty() {
        lines.push(dim_line(EMPTY_PLACEHOLDER));
    } else {
        for item in tray.visible_items() {
            lines.extend(item_lines(item, width));
        }
    }

    lines.push(divider(width));
    lines.push(footer_line());
    lines
}

fn header_line(unread: u32) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Benachrichtigungen",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if unread > 0 {
        spans.push(Span::styled(
            format!(" ({unread} ungelesen)"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn footer_line() -> Line<'static> {
    Line::from(Span::styled(
        "a alle gelesen · r aktualisieren · Esc schliessen",
        Style::default().fg(Color::DarkGray),
    ))
}

fn divider(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(Color::DarkGray),
    ))
}

fn dim_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Three lines per notification: title, message and a meta line
fn item_lines(item: &Notification, width: usize) -> Vec<Line<'static>> {
    // " Neu " pill plus the space before it
    let marker_width = if item.is_read { 0 } else { 6 };
    let title_width = width.saturating_sub(2 + marker_width);

    let mut title_spans = vec![
        Span::styled("• ", Style::default().fg(item.priority.color())),
        Span::styled(
            truncate_to_width(&item.title, title_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if !item.is_read {
        title_spans.push(Span::raw(" "));
        title_spans.push(Span::styled(
            " Neu ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let message = truncate_to_width(&item.message, width.saturating_sub(2));

    vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Gray),
        )),
        meta_line(item, width),
    ]
}

fn meta_line(item: &Notification, width: usize) -> Line<'static> {
    let type_label = item
        .notification_type
        .clone()
        .unwrap_or_else(|| item.priority.label().to_string());

    let mut text = type_label;
    if !item.created_at.is_empty() {
        text.push_str(" · ");
        text.push_str(&item.created_at);
    }

    let mut spans = vec![Span::styled(
        format!("  {}", truncate_to_width(&text, width.saturating_sub(2))),
        Style::default().fg(Color::DarkGray),
    )];
    if item.needs_acknowledgment() {
        spans.push(Span::styled(
            " Bestaetigung erforderlich",
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

/// Cut `text` down to at most `max` display columns, ellipsizing when needed.
/// Width-aware so CJK and other wide characters never push past the popup.
fn truncate_to_width(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
