//! Top-level menu screens

/// The menu context currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Main,
    Configs,
}

impl Screen {
    /// Breadcrumb shown in the header
    pub fn display_path(&self) -> &'static str {
        match self {
            Screen::Main => "home/menu",
            Screen::Configs => "home/menu/configs",
        }
    }

    /// Title of the list rendered for this screen
    pub fn list_title(&self) -> &'static str {
        match self {
            Screen::Main => "Main Menu",
            Screen::Configs => "Configs Menu",
        }
    }
}
