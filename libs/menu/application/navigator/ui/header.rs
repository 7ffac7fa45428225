//! Header and status panels

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::panel;
use crate::application::navigator::Navigator;

pub const BANNER: &str = r"
██████╗░░█████╗░███████╗████████╗██████╗░░█████╗░██████╗░███████╗██████╗░
██╔══██╗██╔══██╗██╔════╝╚══██╔══╝██╔══██╗██╔══██╗██╔══██╗██╔════╝██╔══██╗
██║░░██║███████║█████╗░░░░░██║░░░██████╔╝███████║██║░░██║█████╗░░██████╔╝
██║░░██║██╔══██║██╔══╝░░░░░██║░░░██╔══██╗██╔══██║██║░░██║██╔══╝░░██╔══██╗
██████╔╝██║░░██║███████╗░░░██║░░░██║░░██║██║░░██║██████╔╝███████╗██║░░██║
╚═════╝░╚═╝░░╚═╝╚══════╝░░░╚═╝░░░╚═╝░░╚═╝╚═╝░░╚═╝╚═════╝░╚══════╝╚═╝░░╚═╝
";

/// Banner followed by the breadcrumb of the current screen
pub fn header_text(navigator: &Navigator) -> String {
    format!("{}\nFilepath: {}", BANNER, navigator.display_path())
}

pub fn draw_header(frame: &mut Frame, navigator: &Navigator, area: Rect) {
    let header = Paragraph::new(header_text(navigator)).block(panel());
    frame.render_widget(header, area);
}

pub fn draw_status(frame: &mut Frame, navigator: &Navigator, area: Rect) {
    let status = Paragraph::new(navigator.status_text())
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: true })
        .block(panel());
    frame.render_widget(status, area);
}
