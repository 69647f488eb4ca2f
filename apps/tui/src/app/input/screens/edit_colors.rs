use crate::app::state::{App, AppScreen};
use crate::config::COLOR_PRESETS;
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
            app.color_selection = app.color_selection.prev();
        }
        KeyCode::Down => {
            app.color_selection = app.color_selection.next();
        }
        KeyCode::Left => cycle_preset(app, -1),
        KeyCode::Right => cycle_preset(app, 1),
        _ => {}
    }
}

/// Cycles the selected level through the preset palette; changes persist
/// immediately (the event loop saves on the dirty flag).
fn cycle_preset(app: &mut App, direction: isize) {
    let len = COLOR_PRESETS.len() as isize;
    let current = app
        .colors
        .preset_index(app.color_selection)
        .map_or(0, |i| i as isize);
    let next = (current + direction).rem_euclid(len) as usize;
    let level = app.color_selection;
    app.set_color(level, COLOR_PRESETS[next]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TriggerLevel;

    #[test]
    fn cycling_marks_palette_dirty_and_changes_the_color() {
        let mut app = App::new();
        app.screen = AppScreen::EditColors;
        let before = app.colors.hex(TriggerLevel::MIN).to_string();
        handle(&mut app, KeyCode::Right);
        assert_ne!(app.colors.hex(TriggerLevel::MIN), before);
        assert!(app.colors_dirty);
    }

    #[test]
    fn selection_moves_between_levels() {
        let mut app = App::new();
        handle(&mut app, KeyCode::Down);
        assert_eq!(app.color_selection.get(), 1);
        handle(&mut app, KeyCode::Up);
        handle(&mut app, KeyCode::Up);
        assert_eq!(app.color_selection.get(), 0);
    }
}
