use ratatui::layout::Margin;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help(f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = |k: &'static str, description: &'static str| {
        TextLine::from(vec![
            Span::styled(
                format!("  {k}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" - {description}"), Style::default()),
        ])
    };

    let help_text = vec![
        TextLine::from(vec![Span::styled(
            "pirscope — PIR coverage visualizer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "Loads a CSV of sensor readings (distance, angle, trigger count under any \
             reasonable column names) and plots them on a polar grid. Hover points with \
             the mouse to inspect them.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Chart screen:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("o", "Open a CSV file (type the path, Enter to load)"),
        key("t", "Record table (edit, add, delete rows)"),
        key("c", "Edit trigger-level colors (persisted)"),
        key("a", "Add a default row"),
        key("e", "Export records to CSV"),
        key("p", "Export chart to PNG (2x, white background)"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Record table:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("↑/↓ PgUp/PgDn Home/End", "Navigate"),
        key("Enter", "Edit the selected record"),
        key("d / Delete", "Delete the selected record"),
        key("x", "Clear all records"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Everywhere:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("F1", "Toggle this help screen"),
        key("Esc", "Cancel / go back"),
        key("q", "Quit"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )]),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
