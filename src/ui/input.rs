//! Key handling, per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::{current_year, next_color, FieldValue, FormField, MIN_YEAR};
use crate::ui::app::{App, Route};
use crate::ui::form::FormMode;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.navigate(Route::Listing);
        return;
    }
    if is_ctrl_char(key, 'f') {
        app.navigate(Route::Lookup);
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.open_form(FormMode::Create);
        return;
    }

    match app.route() {
        Route::Lookup => lookup_keys(app, key),
        Route::Listing => listing_keys(app, key),
        Route::Form => form_keys(app, key),
    }
}

fn lookup_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_lookup(),
        KeyCode::Backspace => app.backspace_plate(),
        KeyCode::Esc => app.navigate(Route::Listing),
        KeyCode::Char(ch) if ch.is_ascii_alphanumeric() || ch == '-' => app.push_plate_char(ch),
        _ => {}
    }
}

fn listing_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_listing_selection(-1),
        KeyCode::Down => app.move_listing_selection(1),
        KeyCode::Enter => app.open_selected_vehicle(),
        KeyCode::Char('r') => app.refresh_listing(),
        KeyCode::Char('n') => app.open_form(FormMode::Create),
        _ => {}
    }
}

fn form_keys(app: &mut App, key: KeyEvent) {
    // The discard-confirmation modal swallows everything else.
    if app.form_state().confirm_discard {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.accept_discard(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_close(),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }
    if matches!(key.code, KeyCode::Esc) {
        app.close_form();
        return;
    }

    // Field-specific editing first; the focused widget may consume keys
    // (e.g. Up/Down adjust the year) before generic navigation sees them.
    let field = app.form_state().focused_field();
    let current = app.form_state().draft.field(field);
    if let Some(value) = edit_field_value(field, current, key) {
        app.edit_focused(value);
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev_field(),
        _ => {}
    }
}

/// Apply one key to the focused field's current value.
///
/// Returns `None` when the key does not edit this field, letting the
/// caller fall through to focus navigation.
fn edit_field_value(field: FormField, current: FieldValue, key: KeyEvent) -> Option<FieldValue> {
    match current {
        FieldValue::Flag(value) => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(FieldValue::Flag(!value)),
            _ => None,
        },
        FieldValue::Year(value) => match key.code {
            KeyCode::Up => {
                let next = value.map_or(current_year(), |year| (year + 1).min(current_year()));
                Some(FieldValue::Year(Some(next)))
            }
            KeyCode::Down => {
                let next = value.map_or(current_year(), |year| (year - 1).max(MIN_YEAR));
                Some(FieldValue::Year(Some(next)))
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let digit = ch.to_digit(10).unwrap_or(0) as i32;
                let base = value.unwrap_or(0);
                if base >= 1000 {
                    return None;
                }
                Some(FieldValue::Year(Some(base * 10 + digit)))
            }
            KeyCode::Backspace => {
                let next = value.map(|year| year / 10).filter(|year| *year > 0);
                Some(FieldValue::Year(next))
            }
            _ => None,
        },
        FieldValue::Text(mut text) => {
            if field == FormField::Color {
                return match key.code {
                    KeyCode::Left => Some(FieldValue::Text(next_color(&text, -1).to_string())),
                    KeyCode::Right | KeyCode::Char(' ') => {
                        Some(FieldValue::Text(next_color(&text, 1).to_string()))
                    }
                    _ => None,
                };
            }
            match key.code {
                KeyCode::Char(ch) if accepts_char(field, ch) => {
                    text.push(transform_char(field, ch));
                    Some(FieldValue::Text(text))
                }
                KeyCode::Backspace => {
                    text.pop();
                    Some(FieldValue::Text(text))
                }
                _ => None,
            }
        }
    }
}

fn accepts_char(field: FormField, ch: char) -> bool {
    match field {
        FormField::Plates => ch.is_ascii_alphanumeric() || ch == '-',
        FormField::SellingPrice => ch.is_ascii_digit() || ch == '.',
        FormField::SellingDate => ch.is_ascii_digit() || ch == '-',
        _ => !ch.is_control(),
    }
}

fn transform_char(field: FormField, ch: char) -> char {
    if field == FormField::Plates {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
