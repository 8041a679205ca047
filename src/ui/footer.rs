use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: Route, area_width: u16) -> Paragraph<'static> {
        let hints = match route {
            Route::Listing => {
                " ↑/↓: Select │ Enter: Edit │ n: New │ r: Refresh │ Ctrl+F: Lookup │ Ctrl+Q: Quit"
            }
            Route::Lookup => " Type a plate │ Enter: Fetch │ Ctrl+L: Listing │ Ctrl+Q: Quit",
            Route::Form => " Tab: Next field │ Ctrl+S: Save │ Esc: Back │ Ctrl+Q: Quit",
        };
        let version = format!("v{VERSION} ");

        // Pad by char count, not byte count (the hints contain Unicode).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area_width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
