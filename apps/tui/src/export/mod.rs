// Export collaborators: tabular CSV snapshot and 2x-upscaled PNG render.

pub mod png;
pub mod table;

use chrono::Local;

pub use png::export_png;
pub use table::export_csv;

/// Timestamp suffix shared by default export file names.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M").to_string()
}
