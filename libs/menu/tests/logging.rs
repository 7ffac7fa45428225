//! Integration tests for notification logging
//!
//! Notifications are not printed; they go to the status panel and, when a
//! log file is configured, to that file.

mod common;

use std::fs;

use common::confirm;
use menu::application::navigator::VERSION;
use menu::{file_subscriber, Command, Navigator};

fn log_with<F: FnOnce(&mut Navigator)>(actions: F) -> (Navigator, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("daetrader.log");

    let subscriber = file_subscriber(&path, "info").unwrap();
    let mut navigator = Navigator::new();
    tracing::subscriber::with_default(subscriber, || actions(&mut navigator));

    let contents = fs::read_to_string(&path).unwrap();
    verbose_println!("{}", contents);
    (navigator, contents)
}

#[test]
fn test_selected_option_is_logged() {
    let (navigator, contents) = log_with(|navigator| {
        assert_eq!(confirm(navigator, "Trade"), Command::None);
    });

    assert!(contents.contains("Selected option: Trade"));
    assert_eq!(navigator.notifications().latest(), Some("Selected option: Trade"));
}

#[test]
fn test_every_notification_reaches_the_log() {
    let (navigator, contents) = log_with(|navigator| {
        confirm(navigator, "Version");
        confirm(navigator, "Configs");
        confirm(navigator, "Config 2");
    });

    assert!(contents.contains(&format!("Version {}", VERSION)));
    assert!(contents.contains("Selected config: Config 2"));
    for message in navigator.notifications().messages() {
        assert!(contents.contains(message.as_str()));
    }
}

#[test]
fn test_log_lines_are_plain_text() {
    let (_, contents) = log_with(|navigator| {
        confirm(navigator, "Trade");
    });

    let line = contents
        .lines()
        .find(|line| line.contains("Selected option: Trade"))
        .expect("notification logged");
    assert!(line.contains("INFO"));
    assert!(!line.contains('\u{1b}'));
}
