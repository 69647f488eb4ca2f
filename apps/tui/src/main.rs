use clap::Parser;
use color_eyre::Result;

use pirscope::app::App;
use pirscope::cli::CliArgs;
use pirscope::event;
use pirscope::export;
use pirscope::ingest;
use pirscope::terminal;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Initialize application state
    let mut app = App::new();
    if let Err(e) = app.initialize() {
        eprintln!("Error loading configuration: {e}");
        eprintln!("Will continue with the default palette");
    }

    let one_shot = args.headless
        || args.json
        || args.export_png.is_some()
        || args.export_csv.is_some()
        || !is_terminal();

    if let Some(file) = &args.file {
        match ingest::ingest_file(file) {
            Ok(records) => {
                let source = file.file_name().map(|n| n.to_string_lossy().into_owned());
                app.set_records(records, source);
            }
            // Interactively the error lands in the status line; one-shot
            // runs have nowhere else to put it.
            Err(e) if one_shot => return Err(e.into()),
            Err(e) => app.status_message = format!("Error: {e}"),
        }
    }

    if let Some(path) = &args.export_csv {
        let written = export::export_csv(&app.records, Some(path))?;
        println!("Wrote {}", written.display());
    }
    if let Some(path) = &args.export_png {
        let written = export::export_png(&app.records, &app.colors, Some(path))?;
        println!("Wrote {}", written.display());
    }
    if args.export_csv.is_some() || args.export_png.is_some() {
        return Ok(());
    }

    if args.headless || args.json || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
