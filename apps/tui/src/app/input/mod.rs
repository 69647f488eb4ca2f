mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

/// Pointer events drive hover inspection on the chart screen.
pub fn handle_mouse(app: &mut App, mouse: &MouseEvent) {
    if let MouseEventKind::Moved = mouse.kind {
        app.hover_at(mouse.column, mouse.row);
    }
}
