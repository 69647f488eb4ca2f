pub mod chart;
pub mod edit_colors;
pub mod edit_record;
pub mod records;

use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Chart => chart::handle(app, key),
        AppScreen::Records => records::handle(app, key),
        AppScreen::EditRecord => edit_record::handle(app, key),
        AppScreen::EditColors => edit_colors::handle(app, key),
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}
