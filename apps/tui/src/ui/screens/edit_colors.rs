use crate::app::App;
use crate::domain::TriggerLevel;
use crate::ui::widgets::scatter::level_color;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Legend editor: one row per trigger level, cycling through preset colors.
/// Changes persist immediately.
pub fn render_edit_colors(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let form_area = Rect {
        x: area.width.saturating_sub(40) / 2,
        y: area.height.saturating_sub(12) / 2,
        width: 40.min(area.width),
        height: 12.min(area.height),
    };

    let block = Block::default()
        .title("Trigger Colors")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(6), // One row per level
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(form_area);

    let mut lines = Vec::with_capacity(TriggerLevel::COUNT);
    for index in 0..TriggerLevel::COUNT {
        let Some(level) = TriggerLevel::from_index(index) else {
            continue;
        };
        let is_selected = level == app.color_selection;
        let marker_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let prefix = if is_selected { "> " } else { "  " };

        lines.push(TextLine::from(vec![
            Span::styled(format!("{prefix}{} ", level.label()), marker_style),
            Span::styled("██████", Style::default().fg(level_color(&app.colors, level))),
            Span::styled(
                format!("  {}", app.colors.hex(level)),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    f.render_widget(
        Paragraph::new("Changes are saved immediately")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[2],
    );

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let help_text = TextLine::from(vec![
        Span::styled("↑/↓", key_style),
        Span::raw(": Level   "),
        Span::styled("←/→", key_style),
        Span::raw(": Color   "),
        Span::styled("ESC", key_style),
        Span::raw(": Back"),
    ]);
    f.render_widget(
        Paragraph::new(help_text).alignment(Alignment::Center),
        chunks[3],
    );
}
