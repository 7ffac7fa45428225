//! Rendering for list views

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{keys, FilterState, ListView, ITEM_ROWS};
use crate::domain::MenuEntry;

const TITLE_FG: Color = Color::Indexed(230);
const TITLE_BG: Color = Color::Indexed(62);
const SELECTED: Color = Color::Indexed(170);
const DIMMED: Color = Color::DarkGray;

/// Rows above the entries: title, blank, status, blank
const HEADER_ROWS: u16 = 4;

impl<T: MenuEntry> ListView<T> {
    fn header_lines(&self) -> Vec<Line<'static>> {
        vec![
            self.title_line(),
            Line::default(),
            self.status_line(self.visible_items().len()),
            Line::default(),
        ]
    }

    /// Pagination dots (when paged) followed by the help text
    fn footer_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if self.total_pages() > 1 {
            lines.push(self.pagination_line());
        }

        if self.filter.is_typing() {
            lines.push(help_line(keys::FILTER_HELP));
        } else if self.show_full_help {
            lines.extend(keys::FULL_HELP.iter().map(|row| help_line(row)));
        } else {
            lines.push(help_line(keys::SHORT_HELP));
        }
        lines
    }

    fn list_widget(&self) -> List<'static> {
        let items: Vec<ListItem> = self
            .visible_items()
            .iter()
            .enumerate()
            .map(|(i, item)| entry_item(item, i == self.cursor))
            .collect();

        List::new(items)
            .highlight_symbol("│ ")
            .highlight_style(Style::default().fg(SELECTED))
            .highlight_spacing(HighlightSpacing::Always)
    }

    /// Selection state: scrolled to the first entry of the cursor's page
    fn list_state(&self) -> ListState {
        if self.visible_items().is_empty() {
            return ListState::default();
        }
        ListState::default()
            .with_offset(self.page() * self.per_page())
            .with_selected(Some(self.cursor))
    }

    fn title_line(&self) -> Line<'static> {
        match &self.filter {
            FilterState::Filtering(query) => Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(SELECTED)),
                Span::raw(query.clone()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            _ => Line::from(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(TITLE_FG).bg(TITLE_BG),
            )),
        }
    }

    fn status_line(&self, visible: usize) -> Line<'static> {
        let text = if visible == 0 {
            "No items.".to_string()
        } else if let Some(query) = self.filter.query().filter(|q| !q.is_empty()) {
            format!("“{}” {} of {} items", query, visible, self.items.len())
        } else if visible == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", visible)
        };
        Line::from(Span::styled(text, Style::default().fg(DIMMED)))
    }

    fn pagination_line(&self) -> Line<'static> {
        let page = self.page();
        let dots: Vec<Span<'static>> = (0..self.total_pages())
            .map(|i| {
                if i == page {
                    Span::raw("•")
                } else {
                    Span::styled("•", Style::default().fg(DIMMED))
                }
            })
            .collect();
        Line::from(dots)
    }
}

/// Title, description and a spacer row
fn entry_item<T: MenuEntry>(item: &T, selected: bool) -> ListItem<'static> {
    let title = if selected {
        Span::styled(item.title(), Style::default().add_modifier(Modifier::BOLD))
    } else {
        Span::raw(item.title())
    };
    ListItem::new(Text::from(vec![
        Line::from(title),
        Line::from(Span::styled(item.description(), Style::default().fg(DIMMED))),
        Line::default(),
    ]))
}

fn help_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(DIMMED)))
}

impl<T: MenuEntry> Widget for &ListView<T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let footer = self.footer_lines();
        let footer_rows = footer.len() as u16;
        let list_rows = self.per_page() as u16 * ITEM_ROWS;

        let area = Rect {
            width: area.width.min(self.width),
            height: area
                .height
                .min(self.height)
                .min(HEADER_ROWS + list_rows + footer_rows),
            ..area
        };
        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(0),
            Constraint::Length(footer_rows),
        ])
        .areas(area);

        Paragraph::new(self.header_lines()).render(header_area, buf);
        StatefulWidget::render(self.list_widget(), list_area, buf, &mut self.list_state());
        Paragraph::new(footer).render(footer_area, buf);
    }
}
