//! Integration tests for the navigator layout

mod common;

use common::{confirm, render_rows};
use menu::Navigator;

const WIDTH: u16 = 160;
const HEIGHT: u16 = 50;

fn screen_text(navigator: &Navigator) -> String {
    render_rows(navigator, WIDTH, HEIGHT).join("\n")
}

#[test]
fn test_main_screen_layout() {
    let navigator = Navigator::new();
    let rows = render_rows(&navigator, WIDTH, HEIGHT);
    let text = rows.join("\n");

    verbose_println!("{}", text);

    assert!(text.contains("Filepath: home/menu"));
    assert!(text.contains("Status: Placeholder"));
    assert!(text.contains("Main Menu"));
    assert!(text.contains("│ Trade"));
    assert!(text.contains("Go to trading menu"));
    assert!(!text.contains("Configs Menu"));

    // Rounded panels: header and status side by side on the first row
    assert!(rows[0].starts_with('╭'));
    assert_eq!(rows[0].matches('╭').count(), 2);
}

#[test]
fn test_header_and_status_share_rows() {
    let navigator = Navigator::new();
    let rows = render_rows(&navigator, WIDTH, HEIGHT);

    let path_row = rows
        .iter()
        .position(|row| row.contains("Filepath: home/menu"))
        .expect("breadcrumb rendered");
    let status_row = rows
        .iter()
        .position(|row| row.contains("Status: Placeholder"))
        .expect("status rendered");
    let list_row = rows
        .iter()
        .position(|row| row.contains("Main Menu"))
        .expect("list rendered");

    assert!(path_row < 13);
    assert!(status_row < 13);
    assert!(list_row >= 13);
}

#[test]
fn test_configs_screen_layout() {
    let mut navigator = Navigator::new();
    confirm(&mut navigator, "Configs");
    let text = screen_text(&navigator);

    assert!(text.contains("Filepath: home/menu/configs"));
    assert!(text.contains("Configs Menu"));
    assert!(text.contains("│ Config 1"));
    assert!(text.contains("Return to main menu"));
    assert!(!text.contains("Main Menu"));
}

#[test]
fn test_status_shows_latest_notification() {
    let mut navigator = Navigator::new();
    confirm(&mut navigator, "Trade");
    let text = screen_text(&navigator);

    assert!(text.contains("Selected option:"));
    assert!(text.contains("Trade"));
    assert!(!text.contains("Placeholder"));
}

#[test]
fn test_render_is_pure() {
    let navigator = Navigator::new();
    let before = navigator.clone();
    let first = screen_text(&navigator);
    let second = screen_text(&navigator);

    assert_eq!(first, second);
    assert_eq!(navigator, before);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let navigator = Navigator::new();
    let rows = render_rows(&navigator, 20, 5);
    assert_eq!(rows.len(), 5);
}
