//! Common test utilities for menu integration tests

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use menu::{Command, Navigator, Screen};

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Press each key in order, stopping at the first quit
pub fn press_all(navigator: &mut Navigator, codes: &[KeyCode]) -> Command {
    for code in codes {
        if navigator.update(key(*code)) == Command::Quit {
            return Command::Quit;
        }
    }
    Command::None
}

/// Move the cursor of the active list to the entry with `title`
pub fn highlight(navigator: &mut Navigator, title: &str) {
    navigator.update(key(KeyCode::Home));
    let titles: Vec<&str> = match navigator.screen() {
        Screen::Main => navigator.main_menu().visible_items().iter().map(menu::MenuEntry::title).collect(),
        Screen::Configs => navigator
            .config_menu()
            .visible_items()
            .iter()
            .map(menu::MenuEntry::title)
            .collect(),
    };
    let position = titles
        .iter()
        .position(|t| *t == title)
        .unwrap_or_else(|| panic!("{} not visible on {:?}", title, navigator.screen()));
    for _ in 0..position {
        navigator.update(key(KeyCode::Down));
    }
}

/// Highlight `title` and press enter
pub fn confirm(navigator: &mut Navigator, title: &str) -> Command {
    highlight(navigator, title);
    navigator.update(key(KeyCode::Enter))
}

/// Render the navigator into a test terminal and return its rows as text
pub fn render_rows(navigator: &Navigator, width: u16, height: u16) -> Vec<String> {
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| menu::application::navigator::ui::draw(frame, navigator))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}
