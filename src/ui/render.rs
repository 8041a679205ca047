//! Per-screen drawing. Widgets only read state snapshots.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::domain::{FieldValue, FormField, Vehicle};
use crate::ui::app::{App, Route};
use crate::ui::feedback::{Notice, NoticeKind};
use crate::ui::footer::Footer;
use crate::ui::form::{FormMode, FormState};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, toast_rect};
use crate::ui::resource::ResourceState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);

    let header = Header::new();
    frame.render_widget(
        header.widget(app.route(), app.feedback().is_waiting()),
        header_area,
    );
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Lookup => draw_lookup(frame, app, body),
        Route::Listing => draw_listing(frame, app, body),
        Route::Form => draw_form(frame, app, body),
    }

    let footer = Footer::new();
    frame.render_widget(footer.widget(app.route(), footer_area.width), footer_area);

    if let Some(notice) = app.feedback().current_notice() {
        draw_toast(frame, &notice, body);
    }
}

// --- Lookup screen ---

fn draw_lookup(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let input_area = Rect {
        height: body.height.min(3),
        ..body
    };
    let content = Rect {
        y: body.y + input_area.height,
        height: body.height.saturating_sub(input_area.height),
        ..body
    };

    let input = Paragraph::new(app.plate_input().to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Plate")
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, input_area);
    if input_area.height >= 3 {
        let cursor_x = input_area.x + 1 + app.plate_input().chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(2)), input_area.y + 1));
    }

    let widget = match app.lookup_state() {
        ResourceState::Idle => placeholder("Type a plate number to look up a vehicle."),
        ResourceState::Pending { identifier, .. } => loading(identifier),
        ResourceState::Resolved { payload } => vehicle_view(payload),
        ResourceState::Rejected { error } => error_view(error),
    };
    frame.render_widget(widget, content);
}

// --- Listing screen ---

fn draw_listing(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let widget = match app.listing_state() {
        ResourceState::Idle => placeholder("No vehicles loaded."),
        ResourceState::Pending { .. } => loading("vehicles"),
        ResourceState::Rejected { error } => error_view(error),
        ResourceState::Resolved { payload } if payload.is_empty() => {
            placeholder("No vehicles yet. Press n to add one.")
        }
        ResourceState::Resolved { payload } => listing_view(payload, app.listing_selection()),
    };
    frame.render_widget(widget, body);
}

fn listing_view(vehicles: &[Vehicle], selection: usize) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            " {:>4}  {:<12} {:<14} {:<8} {:<10} {:>10}",
            "id", "brand", "model", "color", "plates", "price"
        ),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))];

    for (index, vehicle) in vehicles.iter().enumerate() {
        let price = vehicle
            .selling_price
            .map(|price| format!("{price:.2}"))
            .unwrap_or_else(|| "—".to_string());
        let text = format!(
            " {:>4}  {:<12} {:<14} {:<8} {:<10} {:>10}",
            vehicle.id, vehicle.brand, vehicle.model, vehicle.color, vehicle.plates, price
        );
        let style = if index == selection {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    Paragraph::new(lines).block(bordered())
}

// --- Form screen ---

fn draw_form(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let state = app.form_state();
    let title = match state.mode {
        FormMode::Edit { id } => format!("Edit vehicle #{id}"),
        FormMode::Create => "New vehicle".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {title}"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (index, field) in FormField::ALL.iter().enumerate() {
        lines.push(field_line(state, *field, index == state.focused));
    }

    frame.render_widget(Paragraph::new(lines).block(bordered()), body);

    if state.confirm_discard {
        let modal = centered_rect(60, 25, body);
        frame.render_widget(Clear, modal);
        let text = vec![
            Line::from("There are unsaved changes. Discard them and leave?"),
            Line::from(""),
            Line::from(Span::styled(
                "[y] discard    [n] keep editing",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Unsaved changes")
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            modal,
        );
    }
}

fn field_line(state: &FormState, field: FormField, focused: bool) -> Line<'static> {
    let marker = if focused { " ▸ " } else { "   " };
    let required = if field.is_required() { "*" } else { " " };
    let label = format!("{marker}{}{required}", field.label());
    let value = field_display(state, field);

    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        Span::styled(format!("{label:<26}"), label_style),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

fn field_display(state: &FormState, field: FormField) -> String {
    match state.draft.field(field) {
        FieldValue::Text(text) if text.is_empty() => "—".to_string(),
        FieldValue::Text(text) => text,
        FieldValue::Year(Some(year)) => year.to_string(),
        FieldValue::Year(None) => "—".to_string(),
        FieldValue::Flag(true) => "[x] yes".to_string(),
        FieldValue::Flag(false) => "[ ] no".to_string(),
    }
}

// --- Shared views ---

fn placeholder(message: &str) -> Paragraph<'static> {
    Paragraph::new(format!(" {message}"))
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
        .block(bordered())
}

fn loading(identifier: &str) -> Paragraph<'static> {
    Paragraph::new(format!(" Loading {identifier}…"))
        .style(Style::default().fg(HEADER_TEXT))
        .block(bordered())
}

fn error_view(error: &str) -> Paragraph<'static> {
    Paragraph::new(format!(" Fetch failed: {error}"))
        .style(Style::default().fg(STATUS_ERROR))
        .block(bordered())
}

fn vehicle_view(vehicle: &Vehicle) -> Paragraph<'static> {
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!(" {label:<22}"),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
        ])
    };

    let lines = vec![
        row("Id", vehicle.id.to_string()),
        row("Brand", vehicle.brand.clone()),
        row("Model", vehicle.model.clone()),
        row("Color", vehicle.color.clone()),
        row(
            "Year of manufacture",
            vehicle
                .year_manufacture
                .map(|year| year.to_string())
                .unwrap_or_else(|| "—".to_string()),
        ),
        row(
            "Imported",
            if vehicle.imported { "yes" } else { "no" }.to_string(),
        ),
        row("Plates", vehicle.plates.clone()),
        row(
            "Selling price",
            vehicle
                .selling_price
                .map(|price| format!("{price:.2}"))
                .unwrap_or_else(|| "—".to_string()),
        ),
        row(
            "Selling date",
            vehicle
                .selling_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "—".to_string()),
        ),
    ];
    Paragraph::new(lines).block(bordered())
}

fn draw_toast(frame: &mut Frame<'_>, notice: &Notice, body: Rect) {
    let color = match notice.kind {
        NoticeKind::Success => STATUS_OK,
        NoticeKind::Error => STATUS_ERROR,
        NoticeKind::Info => HEADER_TEXT,
    };
    let area = toast_rect(body);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!(" {} ", notice.message))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        area,
    );
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
