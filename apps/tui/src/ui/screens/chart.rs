use crate::app::state::InputState;
use crate::app::App;
use crate::domain::TriggerLevel;
use crate::ui::widgets::popup::{anchored_rect, ClearWidget};
use crate::ui::widgets::scatter::{draw_grid, draw_points, level_color};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

fn layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Chart area
            Constraint::Length(1), // Legend
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(1, 0)))
        .to_vec()
}

/// The canvas rect the chart is painted into for a given frame size.
///
/// The event loop uses this to recompute projection params outside the draw
/// path, so the hit tester and the painter always agree on geometry.
pub fn canvas_area(frame_area: Rect) -> Rect {
    let chunks = layout(frame_area);
    Block::default().borders(Borders::ALL).inner(chunks[1])
}

pub fn render_chart(app: &mut App, f: &mut Frame<'_>) {
    let chunks = layout(f.area());

    render_title(app, f, chunks[0]);
    render_canvas(app, f, chunks[1]);
    render_legend(app, f, chunks[2]);
    render_status(app, f, chunks[3]);
    render_shortcuts(f, chunks[4]);
    render_tooltip(app, f);
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let source = app
        .source_name
        .as_deref()
        .map_or_else(String::new, |s| format!("  {s}"));
    let count = if app.records.is_empty() {
        String::new()
    } else {
        format!("  {} records", app.records.len())
    };

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "pirscope ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "PIR coverage visualizer",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(source, Style::default().fg(Color::Gray)),
        Span::styled(count, Style::default().fg(Color::Yellow)),
    ]))
    .block(title_block)
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

fn render_canvas(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chart_block = Block::default()
        .title(" Coverage ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = chart_block.inner(area);
    f.render_widget(chart_block, area);

    if let Some(chart) = app.chart {
        let records = &app.records;
        let colors = &app.colors;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, chart.params.width])
            .y_bounds([0.0, chart.params.height])
            .paint(|ctx| {
                draw_grid(ctx, &chart.spec, &chart.params);
                draw_points(ctx, records, &chart.params, colors);
            });
        f.render_widget(canvas, inner);
    } else if app.records.is_empty() {
        let placeholder = Paragraph::new("No data loaded — press 'o' to open a CSV file")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(placeholder, inner);
    }
    // A degenerate canvas with records present renders nothing; the next
    // settled resize brings the chart back.
}

fn render_legend(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![Span::styled("Triggers: ", Style::default().fg(Color::Gray))];
    for index in 0..TriggerLevel::COUNT {
        if let Some(level) = TriggerLevel::from_index(index) {
            spans.push(Span::styled(
                format!("● {} ", level.label()),
                Style::default().fg(level_color(&app.colors, level)),
            ));
        }
    }
    let legend = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(legend, area);
}

fn render_status(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = status_block.inner(area);
    f.render_widget(status_block, area);

    match app.input_state {
        InputState::EnteringPath => {
            let blink = (app.animation_counter * 2.0).sin() > 0.0;
            let cursor = if blink { "█" } else { " " };
            let prompt = Paragraph::new(TextLine::from(vec![
                Span::styled("Open file: ", Style::default().fg(Color::Green)),
                Span::styled(
                    format!("> {}{}", app.current_input, cursor),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            f.render_widget(prompt, inner);
        }
        InputState::Parsing => {
            let spinner = Throbber::default()
                .label("Parsing file...")
                .style(Style::default().fg(Color::Cyan));
            f.render_stateful_widget(spinner, inner, &mut app.throbber_state);
        }
        InputState::Browsing => {
            if !app.status_message.is_empty() {
                let style = if app.status_message.starts_with("Error") {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Green)
                };
                let status = Paragraph::new(Text::from(Span::styled(&app.status_message, style)))
                    .wrap(Wrap { trim: true });
                f.render_widget(status, inner);
            }
        }
    }
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let sep_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("o", key_style),
        Span::styled(": Open | ", sep_style),
        Span::styled("t", key_style),
        Span::styled(": Table | ", sep_style),
        Span::styled("c", key_style),
        Span::styled(": Colors | ", sep_style),
        Span::styled("a", key_style),
        Span::styled(": Add row | ", sep_style),
        Span::styled("e", key_style),
        Span::styled(": CSV | ", sep_style),
        Span::styled("p", key_style),
        Span::styled(": PNG | ", sep_style),
        Span::styled("F1", key_style),
        Span::styled(": Help | ", sep_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", sep_style),
    ]);

    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        area,
    );
}

/// Tooltip popup next to the pointer while a record is within hover range.
fn render_tooltip(app: &App, f: &mut Frame<'_>) {
    let (Some(index), Some((column, row))) = (app.hover, app.pointer) else {
        return;
    };
    let Some(record) = app.records.get(index) else {
        return;
    };

    let line = TextLine::from(vec![
        Span::styled(
            format!("{}m ", record.distance),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}° ", record.angle_deg), Style::default().fg(Color::White)),
        Span::styled(
            record.trigger.label(),
            Style::default()
                .fg(level_color(&app.colors, record.trigger))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    #[allow(clippy::cast_possible_truncation)]
    let width = line.width() as u16 + 2;
    let area = anchored_rect(column, row, width, 3, f.area());

    f.render_widget(ClearWidget, area);
    f.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
