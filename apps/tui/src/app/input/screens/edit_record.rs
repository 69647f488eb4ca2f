use crate::app::state::{App, AppScreen, EditField};
use crossterm::event::KeyCode;

pub fn handle(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            if let Some(edit_state) = &mut app.edit_record_state {
                if edit_state.editing {
                    edit_state.editing = false;
                    return;
                }
            }
            app.screen = AppScreen::Records;
            app.edit_record_state = None;
        }
        KeyCode::Char('s' | 'S') => {
            // While a text field is being edited, 's' is just a character.
            if let Some(edit_state) = &mut app.edit_record_state {
                if edit_state.editing {
                    if matches!(edit_state.field, EditField::Distance | EditField::Angle) {
                        let buffer = match edit_state.field {
                            EditField::Distance => &mut edit_state.distance,
                            _ => &mut edit_state.angle,
                        };
                        buffer.push(if key == KeyCode::Char('S') { 'S' } else { 's' });
                    }
                    return;
                }
            }

            if let Some(edit_state) = app.edit_record_state.take() {
                let index = app.selected_record_index;
                app.update_record(index, edit_state.committed());
                app.status_message = "Record updated".to_string();
            }
            app.screen = AppScreen::Records;
        }
        KeyCode::Up => {
            if let Some(edit_state) = &mut app.edit_record_state {
                if !edit_state.editing {
                    edit_state.prev_field();
                }
            }
        }
        KeyCode::Down => {
            if let Some(edit_state) = &mut app.edit_record_state {
                if !edit_state.editing {
                    edit_state.next_field();
                }
            }
        }
        KeyCode::Enter => {
            if let Some(edit_state) = &mut app.edit_record_state {
                edit_state.editing = !edit_state.editing;
            }
        }
        _ => {
            if let Some(edit_state) = &mut app.edit_record_state {
                if !edit_state.editing {
                    return;
                }
                match edit_state.field {
                    EditField::Distance | EditField::Angle => {
                        let buffer = match edit_state.field {
                            EditField::Distance => &mut edit_state.distance,
                            _ => &mut edit_state.angle,
                        };
                        match key {
                            KeyCode::Char(c) => buffer.push(c),
                            KeyCode::Backspace => {
                                buffer.pop();
                            }
                            _ => {}
                        }
                    }
                    // Trigger level is always in range: it only moves by
                    // saturating steps.
                    EditField::Trigger => match key {
                        KeyCode::Left => edit_state.trigger = edit_state.trigger.prev(),
                        KeyCode::Right => edit_state.trigger = edit_state.trigger.next(),
                        _ => {}
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::EditRecordState;
    use crate::domain::{CanonicalRecord, TriggerLevel};

    fn app_with_editor() -> App {
        let mut app = App::new();
        app.set_records(vec![CanonicalRecord::new(3.0, 10.0, TriggerLevel::clamp(2))], None);
        app.edit_record_state = Some(EditRecordState::from_record(&app.records[0]));
        app.screen = AppScreen::EditRecord;
        app
    }

    #[test]
    fn typing_into_distance_and_saving_updates_the_record() {
        let mut app = app_with_editor();
        handle(&mut app, KeyCode::Enter); // start editing distance
        handle(&mut app, KeyCode::Backspace);
        handle(&mut app, KeyCode::Char('5'));
        handle(&mut app, KeyCode::Char('.'));
        handle(&mut app, KeyCode::Char('5'));
        handle(&mut app, KeyCode::Enter); // stop editing
        handle(&mut app, KeyCode::Char('s'));

        assert_eq!(app.screen, AppScreen::Records);
        assert!((app.records[0].distance - 5.5).abs() < f64::EPSILON);
        assert!((app.records[0].angle_deg - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trigger_cycles_with_arrows_while_editing() {
        let mut app = app_with_editor();
        handle(&mut app, KeyCode::Down); // angle
        handle(&mut app, KeyCode::Down); // trigger
        handle(&mut app, KeyCode::Enter);
        handle(&mut app, KeyCode::Right);
        handle(&mut app, KeyCode::Enter);
        handle(&mut app, KeyCode::Char('s'));
        assert_eq!(app.records[0].trigger.get(), 3);
    }

    #[test]
    fn escape_cancels_without_committing() {
        let mut app = app_with_editor();
        handle(&mut app, KeyCode::Enter);
        handle(&mut app, KeyCode::Char('9'));
        handle(&mut app, KeyCode::Enter);
        handle(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Records);
        assert!((app.records[0].distance - 3.0).abs() < f64::EPSILON);
    }
}
