//! Menu entries
//!
//! Each screen owns its own entry type so that confirm dispatch is a plain
//! `match` instead of a comparison on titles.

/// A single selectable line in a menu
pub trait MenuEntry: Copy {
    /// Title shown on the first line of the entry
    fn title(&self) -> &'static str;

    /// Description shown underneath the title
    fn description(&self) -> &'static str;

    /// Text the list filter matches against
    fn filter_value(&self) -> &'static str {
        self.title()
    }
}

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainEntry {
    Trade,
    Configs,
    Version,
    Exit,
}

impl MainEntry {
    /// All entries in display order
    pub const ALL: [MainEntry; 4] = [
        MainEntry::Trade,
        MainEntry::Configs,
        MainEntry::Version,
        MainEntry::Exit,
    ];
}

impl MenuEntry for MainEntry {
    fn title(&self) -> &'static str {
        match self {
            MainEntry::Trade => "Trade",
            MainEntry::Configs => "Configs",
            MainEntry::Version => "Version",
            MainEntry::Exit => "Exit",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            MainEntry::Trade => "Go to trading menu",
            MainEntry::Configs => "Create and edit configurations",
            MainEntry::Version => "Show version information",
            MainEntry::Exit => "Exit the application",
        }
    }
}

/// Entries of the configs menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigEntry {
    Config1,
    Config2,
    Back,
}

impl ConfigEntry {
    /// All entries in display order
    pub const ALL: [ConfigEntry; 3] = [ConfigEntry::Config1, ConfigEntry::Config2, ConfigEntry::Back];
}

impl MenuEntry for ConfigEntry {
    fn title(&self) -> &'static str {
        match self {
            ConfigEntry::Config1 => "Config 1",
            ConfigEntry::Config2 => "Config 2",
            ConfigEntry::Back => "Back",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ConfigEntry::Config1 => "Config option 1",
            ConfigEntry::Config2 => "Config option 2",
            ConfigEntry::Back => "Return to main menu",
        }
    }
}
