use std::time::Instant;

use ratatui::{Terminal, backend::TestBackend};

use crate::api::UnreadCount;
use crate::app::App;
use crate::test_utils::test_helpers::test_app;

fn render_app_to_string(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_startup_screen_before_first_sync() {
    let app = test_app();

    let output = render_app_to_string(&app);

    assert!(output.contains("Bildungszentrum"));
    assert!(output.contains(&app.server_label));
    assert!(output.contains("Der Posteingang wurde noch nicht abgerufen."));
    assert!(output.contains("Noch nicht synchronisiert"));
    assert!(output.contains("n Benachrichtigungen"));
}

#[test]
fn test_badge_shows_count_after_sync() {
    let mut app = test_app();
    app.badge.apply(UnreadCount {
        unread_count: 12,
        critical_count: 0,
    });

    let output = render_app_to_string(&app);

    assert!(output.contains(" 12 "));
    assert!(output.contains("12 ungelesene Benachrichtigungen."));
    assert!(output.contains("Stand "));
}

#[test]
fn test_badge_absent_at_zero_unread() {
    let mut app = test_app();
    app.badge.apply(UnreadCount {
        unread_count: 0,
        critical_count: 0,
    });

    let output = render_app_to_string(&app);

    assert!(output.contains("Keine ungelesenen Benachrichtigungen."));
    assert!(!output.contains(" 0 "));
}

#[test]
fn test_singular_unread_summary() {
    let mut app = test_app();
    app.badge.apply(UnreadCount {
        unread_count: 1,
        critical_count: 0,
    });

    let output = render_app_to_string(&app);

    assert!(output.contains("1 ungelesene Benachrichtigung."));
}

#[test]
fn test_critical_line_only_when_present() {
    let mut app = test_app();
    app.badge.apply(UnreadCount {
        unread_count: 5,
        critical_count: 2,
    });

    let output = render_app_to_string(&app);
    assert!(output.contains("Davon 2 kritisch."));

    app.badge.apply(UnreadCount {
        unread_count: 5,
        critical_count: 0,
    });
    let output = render_app_to_string(&app);
    assert!(!output.contains("kritisch"));
}

#[test]
fn test_startup_banner_renders_on_top_row() {
    let mut app = test_app();
    app.announce_startup(Instant::now());

    let output = render_app_to_string(&app);
    let first_line = output.lines().next().unwrap();

    assert!(first_line.contains("Verbunden mit"));
}

#[test]
fn test_no_banner_row_without_alerts() {
    let app = test_app();

    let output = render_app_to_string(&app);
    let first_line = output.lines().next().unwrap();

    assert!(!first_line.contains("Verbunden"));
    // Header border moves up into the first row
    assert!(first_line.contains("─"));
}

#[test]
fn test_open_tray_overlays_the_body() {
    let mut app = test_app();
    app.tray.open();
    app.tray.apply(Vec::new());

    let output = render_app_to_string(&app);

    assert!(output.contains("Keine Benachrichtigungen vorhanden"));
    assert!(output.contains("a alle gelesen"));
}

#[test]
fn test_help_popup_renders_over_everything() {
    let mut app = test_app();
    app.help.visible = true;

    let output = render_app_to_string(&app);

    assert!(output.contains(" Hilfe "));
    assert!(output.contains("TASTEN"));
}
