use crate::app::App;
use crate::ui::widgets::scatter::level_color;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_records(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    if app.records.is_empty() {
        let block = Block::default()
            .title("Records")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No records. Press 'a' to add one or Esc to go back.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Distance (m)"),
        Cell::from("Angle (°)"),
        Cell::from("Trigger"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.records.len();
    let max_visible_rows = area.height.saturating_sub(7) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_record_index);

    let visible = app.records.iter().skip(offset).take(max_visible_rows);

    let rows = visible.enumerate().map(|(i, record)| {
        let is_selected = i + offset == app.selected_record_index;
        let style = if is_selected {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(level_color(&app.colors, record.trigger))
        };

        Row::new(vec![
            Cell::from((i + offset + 1).to_string()),
            Cell::from(record.distance.to_string()),
            Cell::from(record.angle_deg.to_string()),
            Cell::from(record.trigger.label()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Records ({} of {})",
                    app.selected_record_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    f.render_widget(table, chunks[0]);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![
        Span::styled("ESC", key_style),
        Span::raw(": Back   "),
        Span::styled("↑/↓", key_style),
        Span::raw(": Navigate   "),
        Span::styled("Enter", key_style),
        Span::raw(": Edit   "),
        Span::styled("a", key_style),
        Span::raw(": Add   "),
        Span::styled("d", key_style),
        Span::raw(": Delete   "),
        Span::styled("x", key_style),
        Span::raw(": Clear all   "),
        Span::styled("e/p", key_style),
        Span::raw(": Export   "),
        Span::styled("q", key_style),
        Span::raw(": Quit"),
    ];

    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, chunks[1]);
}
