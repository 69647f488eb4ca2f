use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use crate::app::actions::{AppActions, IngestCompletion};
use crate::chart::hit::{find_nearest, HOVER_RADIUS_PX};
use crate::chart::{compute_range, GridSpec, Paddings, ProjectionParams};
use crate::config::ColorTable;
use crate::domain::{CanonicalRecord, TriggerLevel};

/// Trailing-edge window for resize-triggered chart recomputation.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(80);

/// Chart area below which rendering is silently skipped.
const MIN_CANVAS_WIDTH: u16 = 8;
const MIN_CANVAS_HEIGHT: u16 = 6;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Chart,
    Records,
    EditRecord,
    EditColors,
}

/// Input state machine for the chart screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputState {
    Browsing,
    EnteringPath,
    Parsing,
}

/// Which field is currently being edited in the EditRecord screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Distance,
    Angle,
    Trigger,
}

/// Holds the temporary state of a record being edited.
#[derive(Debug, Clone)]
pub struct EditRecordState {
    pub field: EditField,
    pub distance: String,
    pub angle: String,
    pub trigger: TriggerLevel,
    /// Whether we're actively editing the current field
    pub editing: bool,
}

impl EditRecordState {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            field: EditField::Distance,
            distance: record.distance.to_string(),
            angle: record.angle_deg.to_string(),
            trigger: record.trigger,
            editing: false,
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            EditField::Distance => EditField::Angle,
            EditField::Angle => EditField::Trigger,
            EditField::Trigger => EditField::Distance,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            EditField::Distance => EditField::Trigger,
            EditField::Angle => EditField::Distance,
            EditField::Trigger => EditField::Angle,
        };
    }

    /// Committed values; unparseable numeric buffers become 0.0, matching
    /// the original table editor.
    pub fn committed(&self) -> CanonicalRecord {
        let parse = |buffer: &str| {
            buffer
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        };
        CanonicalRecord::new(parse(&self.distance), parse(&self.angle), self.trigger)
    }
}

/// Grid bounds plus the published projection mapping for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct ChartState {
    pub spec: GridSpec,
    pub params: ProjectionParams,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub input_state: InputState,
    pub current_input: String,
    pub status_message: String,

    pub records: Vec<CanonicalRecord>,
    pub source_name: Option<String>,
    pub colors: ColorTable,
    pub colors_dirty: bool,

    pub selected_record_index: usize,
    pub edit_record_state: Option<EditRecordState>,
    pub color_selection: TriggerLevel,

    /// Cached chart geometry; `None` while the record set is empty or the
    /// canvas is degenerate.
    pub chart: Option<ChartState>,
    /// Canvas area the cached geometry was computed for.
    pub chart_area: Option<Rect>,
    pub records_dirty: bool,
    resize_pending: Option<Instant>,

    /// Single-flight ingestion: completions carrying a stale generation are
    /// discarded.
    pub ingest_generation: u64,
    pub ingest_request: Option<PathBuf>,
    pub csv_export_request: bool,
    pub png_export_request: bool,

    pub hover: Option<usize>,
    pub pointer: Option<(u16, u16)>,

    pub animation_counter: f64,
    pub last_frame: Instant,
    pub show_help: bool,
    pub throbber_state: ThrobberState,

    pub actions: AppActions,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Chart,
            input_state: InputState::Browsing,
            current_input: String::new(),
            status_message: String::new(),
            records: Vec::new(),
            source_name: None,
            colors: ColorTable::default(),
            colors_dirty: false,
            selected_record_index: 0,
            edit_record_state: None,
            color_selection: TriggerLevel::MIN,
            chart: None,
            chart_area: None,
            records_dirty: false,
            resize_pending: None,
            ingest_generation: 0,
            ingest_request: None,
            csv_export_request: false,
            png_export_request: false,
            hover: None,
            pointer: None,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            show_help: false,
            throbber_state: ThrobberState::default(),
            actions: AppActions::new(),
        }
    }

    /// Loads configuration (palette file) into the session.
    pub fn initialize(&mut self) -> color_eyre::Result<()> {
        self.colors = self.actions.initialize()?;
        Ok(())
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.input_state == InputState::Parsing {
            self.throbber_state.calc_next();
        }
    }

    /// Replaces the record set wholesale (successful ingestion).
    pub fn set_records(&mut self, records: Vec<CanonicalRecord>, source: Option<String>) {
        self.status_message = format!(
            "Loaded {} record{}{}",
            records.len(),
            if records.len() == 1 { "" } else { "s" },
            source.as_deref().map_or_else(String::new, |s| format!(" from {s}")),
        );
        self.records = records;
        self.source_name = source;
        self.selected_record_index = 0;
        self.hover = None;
        self.records_dirty = true;
    }

    pub fn add_row(&mut self) {
        self.records.push(CanonicalRecord::placeholder());
        self.selected_record_index = self.records.len() - 1;
        self.records_dirty = true;
        self.status_message = "Row added".to_string();
    }

    pub fn delete_selected(&mut self) {
        if self.selected_record_index < self.records.len() {
            self.records.remove(self.selected_record_index);
            if self.selected_record_index >= self.records.len() && !self.records.is_empty() {
                self.selected_record_index = self.records.len() - 1;
            }
            self.hover = None;
            self.records_dirty = true;
            self.status_message = "Row deleted".to_string();
        }
    }

    pub fn clear_records(&mut self) {
        self.records.clear();
        self.selected_record_index = 0;
        self.hover = None;
        self.records_dirty = true;
        self.status_message = "All records cleared".to_string();
    }

    pub fn update_record(&mut self, index: usize, record: CanonicalRecord) {
        if let Some(slot) = self.records.get_mut(index) {
            *slot = record;
            self.records_dirty = true;
        }
    }

    pub fn set_color(&mut self, level: TriggerLevel, hex: &str) {
        self.colors.set_hex(level, hex);
        self.colors_dirty = true;
    }

    /// Starts a new ingestion generation; older in-flight parses become
    /// stale.
    pub fn begin_ingest(&mut self) -> u64 {
        self.ingest_generation += 1;
        self.input_state = InputState::Parsing;
        self.ingest_generation
    }

    /// Applies an ingestion completion, unless a newer request has been made
    /// since it started.
    pub fn complete_ingest(&mut self, completion: IngestCompletion) {
        if completion.generation != self.ingest_generation {
            return;
        }
        self.input_state = InputState::Browsing;
        match completion.result {
            Ok(records) => {
                let source = completion
                    .source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned());
                self.set_records(records, source);
            }
            Err(e) => {
                // Prior records are retained untouched.
                self.status_message = format!("Error: {e}");
            }
        }
    }

    pub fn resize_observed(&mut self) {
        self.resize_pending = Some(Instant::now());
    }

    /// True once per debounce window, when the last resize has settled.
    pub fn resize_settled(&mut self) -> bool {
        match self.resize_pending {
            Some(at) if at.elapsed() >= RESIZE_DEBOUNCE => {
                self.resize_pending = None;
                true
            }
            _ => false,
        }
    }

    /// Recomputes the cached grid bounds and projection for the given canvas
    /// area, publishing them for the hit tester and the renderers.
    pub fn refresh_chart(&mut self, area: Rect) {
        self.chart_area = Some(area);
        self.records_dirty = false;
        self.hover = None;

        if self.records.is_empty()
            || area.width < MIN_CANVAS_WIDTH
            || area.height < MIN_CANVAS_HEIGHT
        {
            self.chart = None;
            return;
        }

        let spec = compute_range(&self.records);
        // Braille resolution: 2x4 subpixels per terminal cell.
        let width = f64::from(area.width) * 2.0;
        let height = f64::from(area.height) * 4.0;
        self.chart = ProjectionParams::fit(&spec, width, height, Paddings::CANVAS)
            .map(|params| ChartState { spec, params });
    }

    /// Updates the hovered record from a pointer position in terminal cells.
    pub fn hover_at(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        if self.screen != AppScreen::Chart {
            self.hover = None;
            return;
        }

        let (Some(area), Some(chart)) = (self.chart_area, &self.chart) else {
            self.hover = None;
            return;
        };
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            self.hover = None;
            return;
        }

        // Center of the hovered cell in Braille subpixels.
        let px = f64::from(column - area.x) * 2.0 + 1.0;
        let py = f64::from(row - area.y) * 4.0 + 2.0;
        self.hover = find_nearest(px, py, &self.records, Some(&chart.params), HOVER_RADIUS_PX);
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
        self.pointer = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::IngestError;

    fn loaded_app(records: Vec<CanonicalRecord>) -> App {
        let mut app = App::new();
        app.set_records(records, None);
        app
    }

    #[test]
    fn stale_ingest_completions_are_discarded() {
        let mut app = App::new();
        let first = app.begin_ingest();
        let second = app.begin_ingest();

        app.complete_ingest(IngestCompletion {
            generation: first,
            source: PathBuf::from("old.csv"),
            result: Ok(vec![CanonicalRecord::placeholder()]),
        });
        assert!(app.records.is_empty(), "stale completion must not apply");
        assert_eq!(app.input_state, InputState::Parsing);

        app.complete_ingest(IngestCompletion {
            generation: second,
            source: PathBuf::from("new.csv"),
            result: Ok(vec![CanonicalRecord::placeholder(), CanonicalRecord::placeholder()]),
        });
        assert_eq!(app.records.len(), 2);
        assert_eq!(app.input_state, InputState::Browsing);
    }

    #[test]
    fn failed_ingest_retains_prior_records() {
        let mut app = loaded_app(vec![CanonicalRecord::placeholder()]);
        let generation = app.begin_ingest();
        app.complete_ingest(IngestCompletion {
            generation,
            source: PathBuf::from("bad.csv"),
            result: Err(IngestError::EmptyInput),
        });
        assert_eq!(app.records.len(), 1);
        assert!(app.status_message.starts_with("Error:"));
    }

    #[test]
    fn refresh_chart_publishes_params_for_records() {
        let mut app = loaded_app(vec![CanonicalRecord::placeholder()]);
        app.refresh_chart(Rect::new(2, 3, 60, 20));
        let chart = app.chart.unwrap();
        assert!(chart.params.scale > 0.0);
        assert!(!app.records_dirty);
    }

    #[test]
    fn degenerate_canvas_clears_params_without_error() {
        let mut app = loaded_app(vec![CanonicalRecord::placeholder()]);
        app.refresh_chart(Rect::new(0, 0, 4, 2));
        assert!(app.chart.is_none());
    }

    #[test]
    fn empty_record_set_has_no_chart() {
        let mut app = App::new();
        app.refresh_chart(Rect::new(0, 0, 60, 20));
        assert!(app.chart.is_none());
    }

    #[test]
    fn hover_hits_a_projected_point() {
        let mut app = loaded_app(vec![CanonicalRecord::new(3.0, 0.0, TriggerLevel::MAX)]);
        let area = Rect::new(0, 0, 60, 24);
        app.refresh_chart(area);
        let chart = app.chart.as_ref().unwrap();
        let (sx, sy) = chart.params.project_record(&app.records[0]);

        // Back from subpixels to the containing cell.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (col, row) = ((sx / 2.0) as u16, (sy / 4.0) as u16);
        app.hover_at(col, row);
        assert_eq!(app.hover, Some(0));

        app.hover_at(area.width - 1, 0);
        assert!(app.hover.is_none());
    }

    #[test]
    fn resize_settles_once_after_the_debounce_window() {
        let mut app = App::new();
        assert!(!app.resize_settled());

        app.resize_observed();
        assert!(!app.resize_settled(), "must wait out the debounce window");

        std::thread::sleep(RESIZE_DEBOUNCE + Duration::from_millis(10));
        assert!(app.resize_settled());
        assert!(!app.resize_settled(), "settling is edge-triggered");
    }

    #[test]
    fn deleting_last_row_moves_selection_back() {
        let mut app = loaded_app(vec![
            CanonicalRecord::placeholder(),
            CanonicalRecord::placeholder(),
        ]);
        app.selected_record_index = 1;
        app.delete_selected();
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.selected_record_index, 0);
    }

    #[test]
    fn edit_state_commits_zero_for_unparseable_buffers() {
        let mut state = EditRecordState::from_record(&CanonicalRecord::placeholder());
        state.distance = "abc".to_string();
        state.angle = "-12.5".to_string();
        let committed = state.committed();
        assert!((committed.distance - 0.0).abs() < f64::EPSILON);
        assert!((committed.angle_deg + 12.5).abs() < f64::EPSILON);
    }
}
