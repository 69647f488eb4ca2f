use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "pirscope", version, about = "PIR sensor coverage visualizer")]
pub struct CliArgs {
    /// Readings file to load on startup (CSV)
    pub file: Option<PathBuf>,

    /// Print record stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override palette file path
    #[arg(long, value_name = "PATH")]
    pub colors: Option<String>,

    /// Render the chart to a PNG and exit
    #[arg(long = "export-png", value_name = "PATH")]
    pub export_png: Option<PathBuf>,

    /// Write the records to a CSV and exit
    #[arg(long = "export-csv", value_name = "PATH")]
    pub export_csv: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(colors) = &self.colors {
            std::env::set_var("PIRSCOPE_COLORS", colors);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
