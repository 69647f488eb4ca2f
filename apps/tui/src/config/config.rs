use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::eyre;
use dotenv::dotenv;

use crate::domain::TriggerLevel;

/// Factory palette for trigger levels 0..=5 (cool to hot).
pub const DEFAULT_COLORS: [&str; TriggerLevel::COUNT] = [
    "#4A8FE7", "#5CC5EF", "#FFCC02", "#FF8C00", "#FF3B30", "#CC0000",
];

/// Choices offered by the legend editor when cycling a level's color.
pub const COLOR_PRESETS: [&str; 12] = [
    "#4A8FE7", "#5CC5EF", "#2ECC71", "#16A085", "#FFCC02", "#F39C12", "#FF8C00", "#FF3B30",
    "#CC0000", "#9B59B6", "#34495E", "#95A5A6",
];

/// Initializes the application configuration.
///
/// Loads `.env` overrides and returns the palette file location.
pub fn init_app_config() -> color_eyre::eyre::Result<PathBuf> {
    dotenv().ok();

    let path = colors_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(path)
}

/// Location of the persisted palette, overridable via `PIRSCOPE_COLORS`.
pub fn colors_path() -> PathBuf {
    env::var("PIRSCOPE_COLORS").map_or_else(|_| PathBuf::from("pirscope_colors.json"), PathBuf::from)
}

/// User-editable palette mapping trigger levels 0..=5 to `#rrggbb` colors.
///
/// Persisted as a plain JSON array of six hex strings; anything malformed
/// (wrong length, unparseable entries) falls back to the factory palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: [String; TriggerLevel::COUNT],
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.map(str::to_string),
        }
    }
}

impl ColorTable {
    /// Loads the palette from `path`, falling back to defaults when the file
    /// is absent or malformed.
    pub fn load(path: &Path) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default();
        };
        let Ok(entries) = serde_json::from_str::<Vec<String>>(&raw) else {
            return Self::default();
        };
        let valid =
            entries.len() == TriggerLevel::COUNT && entries.iter().all(|c| parse_hex(c).is_some());
        if !valid {
            return Self::default();
        }

        let mut colors = DEFAULT_COLORS.map(str::to_string);
        for (slot, entry) in colors.iter_mut().zip(entries) {
            *slot = entry;
        }
        Self { colors }
    }

    pub fn save(&self, path: &Path) -> color_eyre::eyre::Result<()> {
        let json = serde_json::to_string_pretty(&self.colors.to_vec())?;
        fs::write(path, json).map_err(|e| eyre!("failed to save palette: {e}"))
    }

    pub fn hex(&self, level: TriggerLevel) -> &str {
        &self.colors[level.index()]
    }

    pub fn set_hex(&mut self, level: TriggerLevel, hex: &str) {
        if parse_hex(hex).is_some() {
            self.colors[level.index()] = hex.to_string();
        }
    }

    /// The level's color as an RGB triple; defensive gray for entries that
    /// somehow stopped parsing.
    pub fn rgb(&self, level: TriggerLevel) -> (u8, u8, u8) {
        parse_hex(self.hex(level)).unwrap_or((128, 128, 128))
    }

    /// Index of the level's color within [`COLOR_PRESETS`], if it is one.
    pub fn preset_index(&self, level: TriggerLevel) -> Option<usize> {
        COLOR_PRESETS
            .iter()
            .position(|p| p.eq_ignore_ascii_case(self.hex(level)))
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pirscope_colors_{name}.json"))
    }

    #[test]
    fn default_palette_has_six_parseable_colors() {
        let table = ColorTable::default();
        for level in 0..TriggerLevel::COUNT {
            let level = TriggerLevel::from_index(level).unwrap();
            assert!(parse_hex(table.hex(level)).is_some());
        }
    }

    #[test]
    fn palette_round_trips_through_disk() {
        let path = temp_path("roundtrip");
        let mut table = ColorTable::default();
        table.set_hex(TriggerLevel::MIN, "#112233");
        table.save(&path).unwrap();

        let loaded = ColorTable::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.hex(TriggerLevel::MIN), "#112233");
        assert_eq!(loaded, table);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let table = ColorTable::load(&temp_path("does_not_exist"));
        assert_eq!(table, ColorTable::default());
    }

    #[test]
    fn wrong_length_falls_back_to_defaults() {
        let path = temp_path("short");
        std::fs::write(&path, r##"["#112233", "#445566"]"##).unwrap();
        let table = ColorTable::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(table, ColorTable::default());
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let path = temp_path("garbage");
        std::fs::write(&path, "not json at all").unwrap();
        let table = ColorTable::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(table, ColorTable::default());
    }

    #[test]
    fn invalid_hex_is_rejected_by_setter() {
        let mut table = ColorTable::default();
        let before = table.hex(TriggerLevel::MAX).to_string();
        table.set_hex(TriggerLevel::MAX, "red");
        assert_eq!(table.hex(TriggerLevel::MAX), before);
    }

    #[test]
    fn rgb_decodes_hex() {
        let mut table = ColorTable::default();
        table.set_hex(TriggerLevel::MIN, "#FF8040");
        assert_eq!(table.rgb(TriggerLevel::MIN), (255, 128, 64));
    }
}
