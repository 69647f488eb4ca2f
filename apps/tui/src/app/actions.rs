use std::path::PathBuf;

use color_eyre::Result;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::{init_app_config, ColorTable};
use crate::domain::CanonicalRecord;
use crate::export;
use crate::ingest::{ingest_file, IngestError};

/// Outcome of one background parse, tagged with its generation so the event
/// loop can discard completions that lost the race to a newer request.
#[derive(Debug)]
pub struct IngestCompletion {
    pub generation: u64,
    pub source: PathBuf,
    pub result: Result<Vec<CanonicalRecord>, IngestError>,
}

/// Side-effectful operations the event loop performs on behalf of the app.
#[derive(Debug)]
pub struct AppActions {
    pub colors_path: PathBuf,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            colors_path: PathBuf::from("pirscope_colors.json"),
        }
    }

    /// Resolves the palette file location and loads the saved palette.
    pub fn initialize(&mut self) -> Result<ColorTable> {
        self.colors_path = init_app_config()?;
        Ok(ColorTable::load(&self.colors_path))
    }

    pub fn save_colors(&self, colors: &ColorTable) -> Result<()> {
        colors.save(&self.colors_path)
    }

    /// Runs the ingestion pipeline off the UI task and reports back through
    /// the channel. The in-flight parse is never cancelled; a newer
    /// generation simply wins at completion time.
    pub fn spawn_ingest(
        &self,
        path: PathBuf,
        generation: u64,
        completions: UnboundedSender<IngestCompletion>,
    ) {
        tokio::spawn(async move {
            let source = path.clone();
            let result = tokio::task::spawn_blocking(move || ingest_file(&path))
                .await
                .unwrap_or_else(|e| Err(IngestError::Internal(e.to_string())));
            // Receiver gone means the app is shutting down.
            let _ = completions.send(IngestCompletion {
                generation,
                source,
                result,
            });
        });
    }

    pub fn export_csv(&self, records: &[CanonicalRecord]) -> Result<PathBuf> {
        export::export_csv(records, None)
    }

    pub fn export_png(&self, records: &[CanonicalRecord], colors: &ColorTable) -> Result<PathBuf> {
        export::export_png(records, colors, None)
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}
