use crate::app::input::helpers::{step_down, step_up};
use crate::app::state::{App, AppScreen, EditRecordState};
use crossterm::event::KeyCode;

pub fn handle(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Chart;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Up => {
            app.selected_record_index = step_up(app.selected_record_index, 1);
        }
        KeyCode::Down => {
            app.selected_record_index = step_down(app.selected_record_index, app.records.len(), 1);
        }
        KeyCode::PageUp => {
            app.selected_record_index = step_up(app.selected_record_index, 5);
        }
        KeyCode::PageDown => {
            app.selected_record_index = step_down(app.selected_record_index, app.records.len(), 5);
        }
        KeyCode::Home => {
            app.selected_record_index = 0;
        }
        KeyCode::End => {
            if !app.records.is_empty() {
                app.selected_record_index = app.records.len() - 1;
            }
        }
        KeyCode::Enter => {
            if let Some(record) = app.records.get(app.selected_record_index) {
                app.edit_record_state = Some(EditRecordState::from_record(record));
                app.screen = AppScreen::EditRecord;
            }
        }
        KeyCode::Char('a') => app.add_row(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('x') => app.clear_records(),
        KeyCode::Char('e') => app.csv_export_request = true,
        KeyCode::Char('p') => app.png_export_request = true,
        _ => {}
    }
}
