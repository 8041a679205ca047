use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: Route, waiting: bool) -> Paragraph<'static> {
        let screen = match route {
            Route::Lookup => "Plate lookup",
            Route::Listing => "Vehicles",
            Route::Form => "Vehicle form",
        };
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  carport", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(screen, text_style),
        ];
        if waiting {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("working…", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
