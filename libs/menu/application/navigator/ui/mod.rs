//! UI widgets for the navigator

pub mod body;
pub mod header;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Padding},
    Frame,
};

use super::Navigator;

/// Inner width of the header panel
pub const HEADER_WIDTH: u16 = 90;
/// Inner width of the status panel
pub const STATUS_WIDTH: u16 = 28;
/// Inner width of the body panel
pub const BODY_WIDTH: u16 = 120;
/// Inner height of the header and status panels
pub const PANEL_HEIGHT: u16 = 11;

const BORDER_COLOR: Color = Color::Indexed(63);

/// Rounded, padded panel used by every region
pub(crate) fn panel() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .padding(Padding::new(2, 2, 1, 1))
}

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, navigator: &Navigator) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PANEL_HEIGHT + 2), // Header + status
            Constraint::Min(0),                   // Active list
        ])
        .split(frame.area());

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(HEADER_WIDTH + 2),
            Constraint::Length(STATUS_WIDTH + 2),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    header::draw_header(frame, navigator, top[0]);
    header::draw_status(frame, navigator, top[1]);
    body::draw(frame, navigator, body_area(rows[1]));
}

fn body_area(area: Rect) -> Rect {
    Rect {
        width: area.width.min(BODY_WIDTH + 2),
        ..area
    }
}
