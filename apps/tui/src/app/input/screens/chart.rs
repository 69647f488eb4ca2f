use std::path::PathBuf;

use crate::app::state::{App, AppScreen, InputState};
use crossterm::event::KeyCode;

pub fn handle(app: &mut App, key: KeyCode) {
    match app.input_state {
        InputState::Browsing => handle_browsing(app, key),
        InputState::EnteringPath => handle_path_input(app, key),
        // A parse is in flight; it cannot be cancelled, only superseded by
        // requesting another file once this one lands.
        InputState::Parsing => {
            if key == KeyCode::Char('q') {
                app.running = false;
            }
        }
    }
}

fn handle_browsing(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('o') => {
            app.current_input.clear();
            app.input_state = InputState::EnteringPath;
            app.status_message.clear();
        }
        KeyCode::Char('t') => {
            app.selected_record_index = 0;
            app.screen = AppScreen::Records;
            app.clear_hover();
        }
        KeyCode::Char('c') => {
            app.screen = AppScreen::EditColors;
            app.clear_hover();
        }
        KeyCode::Char('a') => app.add_row(),
        KeyCode::Char('e') => app.csv_export_request = true,
        KeyCode::Char('p') => app.png_export_request = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_path_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.current_input.push(c),
        KeyCode::Backspace => {
            app.current_input.pop();
        }
        KeyCode::Enter => {
            let path = app.current_input.trim().to_string();
            if path.is_empty() {
                app.input_state = InputState::Browsing;
            } else {
                app.ingest_request = Some(PathBuf::from(path));
            }
        }
        KeyCode::Esc => {
            app.current_input.clear();
            app.input_state = InputState::Browsing;
        }
        _ => {}
    }
}
