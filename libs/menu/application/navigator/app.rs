//! Navigator state machine
//!
//! `Navigator` is the whole mutable state of the program. The event loop
//! owns it and hands every key press to [`Navigator::update`]; confirm
//! presses are dispatched here, everything else goes to the active list.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info};

use super::state::NotificationLog;
use crate::domain::{ConfigEntry, MainEntry, MenuEntry, Screen};
use crate::infrastructure::list::{ListCommand, ListView, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Version reported by the Version entry
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status text shown before anything was selected
pub const STATUS_PLACEHOLDER: &str = "Placeholder";

/// Follow-up requested by the navigator after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
}

impl From<ListCommand> for Command {
    fn from(command: ListCommand) -> Self {
        match command {
            ListCommand::None => Command::None,
            ListCommand::Quit => Command::Quit,
        }
    }
}

/// Menu navigator state
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    screen: Screen,
    main_menu: ListView<MainEntry>,
    config_menu: ListView<ConfigEntry>,
    notifications: NotificationLog,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            screen: Screen::Main,
            main_menu: ListView::new(
                Screen::Main.list_title(),
                MainEntry::ALL,
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
            ),
            config_menu: ListView::new(
                Screen::Configs.list_title(),
                ConfigEntry::ALL,
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
            ),
            notifications: NotificationLog::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Breadcrumb of the current screen
    pub fn display_path(&self) -> &'static str {
        self.screen.display_path()
    }

    pub fn main_menu(&self) -> &ListView<MainEntry> {
        &self.main_menu
    }

    pub fn config_menu(&self) -> &ListView<ConfigEntry> {
        &self.config_menu
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    /// Text of the status panel
    pub fn status_text(&self) -> String {
        format!(
            "Status: {}",
            self.notifications.latest().unwrap_or(STATUS_PLACEHOLDER)
        )
    }

    /// Handle one key press
    pub fn update(&mut self, key: KeyEvent) -> Command {
        // Enter while typing a filter accepts the query instead
        if key.code == KeyCode::Enter && !self.active_list_is_filtering() {
            return self.confirm();
        }

        match self.screen {
            Screen::Main => self.main_menu.update(key).into(),
            Screen::Configs => self.config_menu.update(key).into(),
        }
    }

    fn active_list_is_filtering(&self) -> bool {
        match self.screen {
            Screen::Main => self.main_menu.is_filtering(),
            Screen::Configs => self.config_menu.is_filtering(),
        }
    }

    /// Commit the highlighted entry of the active screen
    fn confirm(&mut self) -> Command {
        match self.screen {
            Screen::Main => match self.main_menu.selected_entry() {
                Some(MainEntry::Exit) => {
                    info!("Exit selected, quitting");
                    return Command::Quit;
                }
                Some(MainEntry::Configs) => self.navigate_to(Screen::Configs),
                Some(MainEntry::Version) => self.notify(format!("Version {}", VERSION)),
                Some(entry) => self.notify(format!("Selected option: {}", entry.title())),
                None => debug!("Confirm with no highlighted entry ignored"),
            },
            Screen::Configs => match self.config_menu.selected_entry() {
                Some(ConfigEntry::Back) => self.navigate_to(Screen::Main),
                Some(entry) => self.notify(format!("Selected config: {}", entry.title())),
                None => debug!("Confirm with no highlighted entry ignored"),
            },
        }
        Command::None
    }

    fn navigate_to(&mut self, screen: Screen) {
        debug!("Screen {:?} -> {:?} ({})", self.screen, screen, screen.display_path());
        self.screen = screen;
    }

    fn notify(&mut self, message: String) {
        info!("{}", message);
        self.notifications.push(message);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
