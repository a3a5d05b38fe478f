//! Tests for tray popup rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use super::*;

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 30;

fn render_tray_to_string(tray: &TrayState, unread: u32) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let anchor = Rect {
                x: 0,
                y: 0,
                width: TEST_WIDTH,
                height: 3,
            };
            render_popup(tray, unread, frame, anchor);
        })
        .unwrap();
    terminal.backend().to_string()
}

fn notification_json(id: u64, title: &str, is_read: bool) -> Notification {
    serde_json::from_str(&format!(
        r#"{{
            "id": {id},
            "title": "{title}",
            "message": "Nachricht {id}",
            "is_read": {is_read},
            "priority": "normal",
            "notification_type": "Allgemeine Mitteilung",
            "created_at": "01.09.2025 12:00"
        }}"#
    ))
    .unwrap()
}

#[test]
fn test_closed_tray_renders_nothing() {
    let tray = TrayState::new(5);
    let output = render_tray_to_string(&tray, 3);

    assert!(!output.contains("Benachrichtigungen"));
}

#[test]
fn test_open_tray_before_first_response_shows_loading() {
    let mut tray = TrayState::new(5);
    tray.open();

    let output = render_tray_to_string(&tray, 0);
    assert!(output.contains("Benachrichtigungen"));
    assert!(output.contains("Wird geladen"));
}

#[test]
fn test_empty_response_shows_placeholder() {
    let mut tray = TrayState::new(5);
    tray.open();
    tray.apply(vec![]);

    let output = render_tray_to_string(&tray, 0);
    assert!(output.contains("Keine Benachrichtigungen vorhanden"));
    assert!(!output.contains("Wird geladen"));
}

#[test]
fn test_items_render_between_header_and_footer() {
    let mut tray = TrayState::new(5);
    tray.open();
    tray.apply(vec![
        notification_json(1, "Preisaenderung", false),
        notification_json(2, "Stundenplan", true),
    ]);

    let output = render_tray_to_string(&tray, 1);
    assert!(output.contains("Benachrichtigungen"));
    assert!(output.contains("Preisaenderung"));
    assert!(output.contains("Stundenplan"));
    assert!(output.contains("Allgemeine Mitteilung"));
    assert!(output.contains("01.09.2025 12:00"));
    // Footer action line survives at the bottom
    assert!(output.contains("a alle gelesen"));
}

#[test]
fn test_unread_summary_in_header() {
    let mut tray = TrayState::new(5);
    tray.open();
    tray.apply(vec![notification_json(1, "Titel", false)]);

    let output = render_tray_to_string(&tray, 4);
    assert!(output.contains("(4 ungelesen)"));

    let output = render_tray_to_string(&tray, 0);
    assert!(!output.contains("ungelesen"));
}

#[test]
fn test_new_marker_only_on_unread_items() {
    let mut tray = TrayState::new(5);
    tray.open();
    tray.apply(vec![
        notification_json(1, "Ungelesen", false),
        notification_json(2, "Gelesen", true),
    ]);

    let output = render_tray_to_string(&tray, 1);
    let unread_line = output
        .lines()
        .find(|l| l.contains("Ungelesen"))
        .expect("unread item line");
    let read_line = output
        .lines()
        .find(|l| l.contains("Gelesen") && !l.contains("Ungelesen"))
        .expect("read item line");

    assert!(unread_line.contains("Neu"));
    assert!(!read_line.contains("Neu"));
}

#[test]
fn test_at_most_five_items_rendered() {
    let mut tray = TrayState::new(5);
    tray.open();
    tray.apply(
        (1..=8)
            .map(|i| notification_json(i, &format!("Mitteilung{i}"), false))
            .collect(),
    );

    let output = render_tray_to_string(&tray, 8);
    assert!(output.contains("Mitteilung1"));
    assert!(output.contains("Mitteilung5"));
    assert!(!output.contains("Mitteilung6"));
}

#[test]
fn test_refresh_replaces_body_but_keeps_structure() {
    let mut tray = TrayState::new(5);
    tray.open();
    tray.apply(vec![notification_json(1, "Vorher", false)]);

    let before = render_tray_to_string(&tray, 1);
    assert!(before.contains("Vorher"));

    tray.refresh();
    tray.apply(vec![notification_json(2, "Nachher", false)]);

    let after = render_tray_to_string(&tray, 1);
    assert!(!after.contains("Vorher"));
    assert!(after.contains("Nachher"));
    // Fixed structure is still there
    assert!(after.contains("Benachrichtigungen"));
    assert!(after.contains("a alle gelesen"));
}

#[test]
fn test_acknowledgment_hint_for_critical_items() {
    let mut tray = TrayState::new(5);
    tray.open();

    let critical: Notification = serde_json::from_str(
        r#"{
            "id": 1,
            "title": "SEPA Aenderung",
            "priority": "critical",
            "requires_acknowledgment": true,
            "created_at": "01.09.2025 12:00"
        }"#,
    )
    .unwrap();
    tray.apply(vec![critical]);

    let output = render_tray_to_string(&tray, 1);
    assert!(output.contains("Bestaetigung erforderlich"));
}

#[test]
fn test_truncate_keeps_short_text() {
    assert_eq!(truncate_to_width("kurz", 10), "kurz");
    assert_eq!(truncate_to_width("genau zehn", 10), "genau zehn");
}

#[test]
fn test_truncate_ellipsizes_long_text() {
    let long = "Eine sehr lange Benachrichtigung ueber Preise";
    let cut = truncate_to_width(long, 10);

    assert!(cut.ends_with('…'));
    assert!(UnicodeWidthStr::width(cut.as_str()) <= 10);
}

#[test]
fn test_truncate_is_width_aware_for_wide_chars() {
    // Each of these characters occupies two columns
    let wide = "通知通知通知";
    let cut = truncate_to_width(wide, 7);

    assert!(UnicodeWidthStr::width(cut.as_str()) <= 7);
    assert!(cut.ends_with('…'));
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_long_titles_do_not_break_narrow_popup() {
    let mut tray = TrayState::new(5);
    tray.open();
    tray.apply(vec![notification_json(
        1,
        "Eine wirklich ausgesprochen lange Betreffzeile die niemals passt",
        false,
    )]);

    // Narrow terminal: the popup clamps and truncates rather than panicking
    let backend = TestBackend::new(30, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let anchor = Rect {
                x: 0,
                y: 0,
                width: 30,
                height: 3,
            };
            render_popup(&tray, 1, frame, anchor);
        })
        .unwrap();

    let output = terminal.backend().to_string();
    assert!(output.contains("Eine wirklich"));
}
