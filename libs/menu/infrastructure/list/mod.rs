//! List view
//!
//! Owns the cursor, paging and filter state of one entry list. The
//! navigator forwards every non-confirm key here and never touches the
//! selection directly.

pub mod filter;
pub mod keys;
mod render;

use crossterm::event::KeyEvent;

use crate::domain::MenuEntry;

pub use filter::FilterState;
use keys::{FilterAction, ListAction};

/// Default list width in columns
pub const DEFAULT_WIDTH: u16 = 40;
/// Default list height in rows
pub const DEFAULT_HEIGHT: u16 = 28;

/// Rows used by one entry: title, description, spacer
pub(crate) const ITEM_ROWS: u16 = 3;
/// Rows used around the entries: title, blank, status, blank, pagination, help
pub(crate) const CHROME_ROWS: u16 = 6;

/// Follow-up requested by a list after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    None,
    Quit,
}

/// Selectable, filterable list of entries
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T: MenuEntry> {
    title: &'static str,
    items: Vec<T>,
    width: u16,
    height: u16,
    /// Index into the visible (filtered) items
    cursor: usize,
    filter: FilterState,
    show_full_help: bool,
}

impl<T: MenuEntry> ListView<T> {
    pub fn new(title: &'static str, items: impl Into<Vec<T>>, width: u16, height: u16) -> Self {
        Self {
            title,
            items: items.into(),
            width,
            height,
            cursor: 0,
            filter: FilterState::Unfiltered,
            show_full_help: false,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Items that pass the current filter, in original order
    pub fn visible_items(&self) -> Vec<T> {
        match self.filter.query() {
            Some(query) => self
                .items
                .iter()
                .copied()
                .filter(|item| filter::matches(query, item.filter_value()))
                .collect(),
            None => self.items.clone(),
        }
    }

    /// Cursor position within the visible items
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Highlighted entry, `None` when nothing is visible
    pub fn selected_entry(&self) -> Option<T> {
        self.visible_items().get(self.cursor).copied()
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Whether the user is currently typing a filter query
    pub fn is_filtering(&self) -> bool {
        self.filter.is_typing()
    }

    pub fn show_full_help(&self) -> bool {
        self.show_full_help
    }

    /// Entries that fit on one page
    pub fn per_page(&self) -> usize {
        (self.height.saturating_sub(CHROME_ROWS) / ITEM_ROWS).max(1) as usize
    }

    /// Zero-based page holding the cursor
    pub fn page(&self) -> usize {
        self.cursor / self.per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.visible_items().len().div_ceil(self.per_page()).max(1)
    }

    /// Handle a key and report whether the list wants the program to quit
    pub fn update(&mut self, key: KeyEvent) -> ListCommand {
        if self.filter.is_typing() {
            match keys::filter_action(&key) {
                Some(action) => self.apply_filter_action(action),
                None => ListCommand::None,
            }
        } else {
            match keys::browse_action(&key) {
                Some(action) => self.apply_browse_action(action),
                None => ListCommand::None,
            }
        }
    }

    fn apply_browse_action(&mut self, action: ListAction) -> ListCommand {
        match action {
            ListAction::CursorUp => self.cursor_up(),
            ListAction::CursorDown => self.cursor_down(),
            ListAction::PrevPage => self.prev_page(),
            ListAction::NextPage => self.next_page(),
            ListAction::GoToStart => self.cursor = 0,
            ListAction::GoToEnd => self.cursor = self.visible_items().len().saturating_sub(1),
            ListAction::StartFilter => {
                let query = self.filter.query().unwrap_or_default().to_string();
                self.filter = FilterState::Filtering(query);
                self.cursor = 0;
            }
            ListAction::ClearFilterOrQuit => {
                if matches!(self.filter, FilterState::Applied(_)) {
                    self.reset_filter();
                } else {
                    return ListCommand::Quit;
                }
            }
            ListAction::Quit | ListAction::ForceQuit => return ListCommand::Quit,
            ListAction::ToggleHelp => self.show_full_help = !self.show_full_help,
        }
        ListCommand::None
    }

    fn apply_filter_action(&mut self, action: FilterAction) -> ListCommand {
        let FilterState::Filtering(query) = &mut self.filter else {
            return ListCommand::None;
        };

        match action {
            FilterAction::Insert(c) => {
                query.push(c);
                self.cursor = 0;
            }
            FilterAction::DeleteBack => {
                if query.pop().is_none() {
                    self.reset_filter();
                } else {
                    self.cursor = 0;
                }
            }
            FilterAction::Accept => {
                if query.is_empty() {
                    self.filter = FilterState::Unfiltered;
                } else {
                    self.filter = FilterState::Applied(std::mem::take(query));
                }
                self.clamp_cursor();
            }
            FilterAction::Cancel => self.reset_filter(),
            FilterAction::CursorUp => self.cursor_up(),
            FilterAction::CursorDown => self.cursor_down(),
            FilterAction::ForceQuit => return ListCommand::Quit,
        }
        ListCommand::None
    }

    fn reset_filter(&mut self) {
        self.filter = FilterState::Unfiltered;
        self.cursor = 0;
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible_items().len().saturating_sub(1));
    }

    fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_down(&mut self) {
        let len = self.visible_items().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    fn prev_page(&mut self) {
        if self.page() > 0 {
            self.cursor -= self.per_page();
        }
    }

    fn next_page(&mut self) {
        if self.page() + 1 < self.total_pages() {
            self.cursor += self.per_page();
            self.clamp_cursor();
        }
    }
}
