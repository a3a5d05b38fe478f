//! Help popup rendering

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::content::{HELP_ENTRIES, HELP_FOOTER};
use super::state::HelpState;
use crate::widgets::popup;

const HELP_POPUP_WIDTH: u16 = 56;
const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

/// Render the help popup (centered modal with key bindings)
pub fn render_popup(help: &HelpState, frame: &mut Frame) {
    if !help.visible {
        return;
    }

    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    let content_height = HELP_ENTRIES.len() as u16;
    let popup_width = HELP_POPUP_WIDTH.min(frame_area.width);
    let popup_height = (content_height + HELP_POPUP_PADDING).min(frame_area.height);

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() {
            // Section header
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    *desc,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {HELP_FOOTER}"),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Hilfe ")
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
