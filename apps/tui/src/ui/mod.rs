// UI module for pirscope
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    if app.show_help {
        screens::help::render_help(f);
        return;
    }

    match app.screen {
        AppScreen::Chart => screens::chart::render_chart(app, f),
        AppScreen::Records => screens::records::render_records(app, f),
        AppScreen::EditRecord => screens::edit_record::render_edit_record(app, f),
        AppScreen::EditColors => screens::edit_colors::render_edit_colors(app, f),
    }
}
