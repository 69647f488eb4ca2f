use crate::app::state::EditField;
use crate::app::App;
use crate::ui::widgets::scatter::level_color;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_edit_record(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let Some(edit_state) = &app.edit_record_state else {
        return;
    };

    let form_area = Rect {
        x: area.width.saturating_sub(46) / 2,
        y: area.height.saturating_sub(11) / 2,
        width: 46.min(area.width),
        height: 11.min(area.height),
    };

    let block = Block::default()
        .title(format!("Edit Record #{}", app.selected_record_index + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(block, form_area);

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Distance
            Constraint::Length(1), // Angle
            Constraint::Length(1), // Trigger
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Status
            Constraint::Length(1), // Help text
        ])
        .split(form_area);

    let field_style = |field: EditField| {
        let is_selected = edit_state.field == field;
        let is_editing = is_selected && edit_state.editing;

        if is_editing {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let field_label = |name: &str, field: EditField| {
        let prefix = if edit_state.field == field && edit_state.editing {
            "► "
        } else if edit_state.field == field {
            "> "
        } else {
            "  "
        };
        Span::styled(format!("{prefix}{name}: "), field_style(field))
    };

    let distance_text = TextLine::from(vec![
        field_label("Distance (m)", EditField::Distance),
        Span::styled(&edit_state.distance, field_style(EditField::Distance)),
    ]);
    f.render_widget(Paragraph::new(distance_text), form_chunks[0]);

    let angle_text = TextLine::from(vec![
        field_label("Angle (°)  ", EditField::Angle),
        Span::styled(&edit_state.angle, field_style(EditField::Angle)),
    ]);
    f.render_widget(Paragraph::new(angle_text), form_chunks[1]);

    let trigger_text = TextLine::from(vec![
        field_label("Trigger    ", EditField::Trigger),
        Span::styled(
            edit_state.trigger.label(),
            field_style(EditField::Trigger).fg(level_color(&app.colors, edit_state.trigger)),
        ),
    ]);
    f.render_widget(Paragraph::new(trigger_text), form_chunks[2]);

    let status_text = if edit_state.editing {
        match edit_state.field {
            EditField::Trigger => "Editing: ←/→ to change level, Enter to confirm",
            _ => "Editing: type a number, Enter to confirm, Esc to cancel",
        }
    } else {
        "↑/↓ select field, Enter to edit, Esc to exit"
    };
    f.render_widget(
        Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        form_chunks[4],
    );

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let help_text = TextLine::from(vec![
        Span::styled("ESC", key_style),
        Span::raw(": Cancel   "),
        Span::styled("S", key_style),
        Span::raw(": Save Changes"),
    ]);
    f.render_widget(
        Paragraph::new(help_text).alignment(Alignment::Center),
        form_chunks[5],
    );
}
