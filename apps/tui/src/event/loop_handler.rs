use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::sync::mpsc;

use crate::app::actions::IngestCompletion;
use crate::app::{handle_input, handle_mouse, App};
use crate::chart::{compute_range, GridSpec};
use crate::domain::TriggerLevel;
use crate::ui;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let (completions_tx, mut completions_rx) = mpsc::unbounded_channel::<IngestCompletion>();

    loop {
        app.update();

        // Side effects requested by the input handlers run here, so the
        // handlers themselves stay synchronous against App state.
        if let Some(path) = app.ingest_request.take() {
            let generation = app.begin_ingest();
            app.actions.spawn_ingest(path, generation, completions_tx.clone());
        }

        while let Ok(completion) = completions_rx.try_recv() {
            app.complete_ingest(completion);
        }

        if app.colors_dirty {
            app.colors_dirty = false;
            if let Err(e) = app.actions.save_colors(&app.colors) {
                app.status_message = format!("Error: failed to save colors: {e}");
            }
        }

        if app.csv_export_request {
            app.csv_export_request = false;
            app.status_message = match app.actions.export_csv(&app.records) {
                Ok(path) => format!("Exported {}", path.display()),
                Err(e) => format!("Error: {e}"),
            };
        }

        if app.png_export_request {
            app.png_export_request = false;
            app.status_message = match app.actions.export_png(&app.records, &app.colors) {
                Ok(path) => format!("Exported {}", path.display()),
                Err(e) => format!("Error: {e}"),
            };
        }

        // Chart geometry follows record edits immediately; resizes apply
        // only after the debounce window settles, so frames in between draw
        // with the previous projection.
        let size = terminal.size()?;
        let frame = Rect::new(0, 0, size.width, size.height);
        let canvas = ui::screens::chart::canvas_area(frame);
        if app.records_dirty || app.resize_settled() || app.chart_area.is_none() {
            app.refresh_chart(canvas);
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Press {
                        handle_input(app, key.code);
                        if !app.running {
                            break;
                        }
                    }
                }
                Ok(Event::Mouse(mouse)) => handle_mouse(app, &mouse),
                Ok(Event::Resize(_, _)) => app.resize_observed(),
                _ => {
                    // Ignore focus/paste events and transient read errors
                }
            }
        }
    }
    Ok(())
}

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let stats = build_headless_stats(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nPIR Coverage Stats");
    println!("==================");
    if let Some(source) = &stats.source {
        println!("Source: {source}");
    }
    println!("Records: {}", stats.record_count);

    if let (Some(distance), Some(angle)) = (stats.max_distance, stats.max_abs_angle_deg) {
        println!("Max distance: {distance}m");
        println!("Max |angle|: {angle}°");
    }

    if let Some(grid) = &stats.grid {
        println!(
            "Grid: {}m outer arc, {}m step, ±{}° sweep",
            grid.max_distance, grid.distance_step, grid.max_angle_deg
        );
    }

    println!("\nTrigger histogram:");
    for (level, count) in stats.trigger_histogram.iter().enumerate() {
        println!("- {level}/5: {count}");
    }
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let mut histogram = [0_usize; TriggerLevel::COUNT];
    for record in &app.records {
        histogram[record.trigger.index()] += 1;
    }

    let max_distance = app
        .records
        .iter()
        .map(|r| r.distance)
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.max(d))));
    let max_abs_angle_deg = app
        .records
        .iter()
        .map(|r| r.angle_deg.abs())
        .fold(None, |acc: Option<f64>, a| Some(acc.map_or(a, |b| b.max(a))));

    let grid = if app.records.is_empty() {
        None
    } else {
        Some(compute_range(&app.records))
    };

    HeadlessStats {
        record_count: app.records.len(),
        source: app.source_name.clone(),
        max_distance,
        max_abs_angle_deg,
        grid,
        trigger_histogram: histogram,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    record_count: usize,
    source: Option<String>,
    max_distance: Option<f64>,
    max_abs_angle_deg: Option<f64>,
    grid: Option<GridSpec>,
    trigger_histogram: [usize; TriggerLevel::COUNT],
}
