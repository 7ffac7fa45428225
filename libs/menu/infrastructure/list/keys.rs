//! Key bindings understood by list views

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action a key maps to while browsing (not typing a filter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    CursorUp,
    CursorDown,
    PrevPage,
    NextPage,
    GoToStart,
    GoToEnd,
    StartFilter,
    ClearFilterOrQuit,
    Quit,
    ForceQuit,
    ToggleHelp,
}

/// Action a key maps to while typing a filter query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Insert(char),
    DeleteBack,
    Accept,
    Cancel,
    CursorUp,
    CursorDown,
    ForceQuit,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

/// Map a key to a browsing action
pub fn browse_action(key: &KeyEvent) -> Option<ListAction> {
    if is_ctrl_c(key) {
        return Some(ListAction::ForceQuit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ListAction::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => ListAction::CursorDown,
        KeyCode::Left
        | KeyCode::PageUp
        | KeyCode::Char('h')
        | KeyCode::Char('b')
        | KeyCode::Char('u') => ListAction::PrevPage,
        KeyCode::Right
        | KeyCode::PageDown
        | KeyCode::Char('l')
        | KeyCode::Char('f')
        | KeyCode::Char('d') => ListAction::NextPage,
        KeyCode::Home | KeyCode::Char('g') => ListAction::GoToStart,
        KeyCode::End | KeyCode::Char('G') => ListAction::GoToEnd,
        KeyCode::Char('/') => ListAction::StartFilter,
        KeyCode::Esc => ListAction::ClearFilterOrQuit,
        KeyCode::Char('q') => ListAction::Quit,
        KeyCode::Char('?') => ListAction::ToggleHelp,
        _ => return None,
    };
    Some(action)
}

/// Map a key to a filter-input action
pub fn filter_action(key: &KeyEvent) -> Option<FilterAction> {
    if is_ctrl_c(key) {
        return Some(FilterAction::ForceQuit);
    }

    let action = match key.code {
        KeyCode::Enter => FilterAction::Accept,
        KeyCode::Esc => FilterAction::Cancel,
        KeyCode::Backspace => FilterAction::DeleteBack,
        KeyCode::Up => FilterAction::CursorUp,
        KeyCode::Down => FilterAction::CursorDown,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => FilterAction::Insert(c),
        _ => return None,
    };
    Some(action)
}

/// Help shown under the list in its short form
pub const SHORT_HELP: &str = "↑/k up • ↓/j down • / filter • q quit • ? more";

/// Help shown under the list when expanded
pub const FULL_HELP: [&str; 4] = [
    "↑/k up • ↓/j down • ←/h/pgup prev page • →/l/pgdn next page",
    "g/home go to start • G/end go to end • enter select",
    "/ filter • esc clear filter • q quit • ctrl+c force quit",
    "? close help",
];

/// Help shown while typing a filter query
pub const FILTER_HELP: &str = "enter apply filter • esc cancel";
