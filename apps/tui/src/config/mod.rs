pub mod config;

pub use config::{colors_path, init_app_config, ColorTable, COLOR_PRESETS, DEFAULT_COLORS};
