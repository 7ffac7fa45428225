//! Body panel - the active screen's list

use ratatui::{layout::Rect, Frame};

use super::panel;
use crate::application::navigator::Navigator;
use crate::domain::Screen;

/// Draw the list of the active screen; the other list is not rendered
pub fn draw(frame: &mut Frame, navigator: &Navigator, area: Rect) {
    let block = panel();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match navigator.screen() {
        Screen::Main => frame.render_widget(navigator.main_menu(), inner),
        Screen::Configs => frame.render_widget(navigator.config_menu(), inner),
    }
}
