use std::error::Error;
use std::path::{Path, PathBuf};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use plotters::backend::BitMapBackend;
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, PathElement, Polygon, Text};
use plotters::style::colors::WHITE;
use plotters::style::{Color, IntoFont, RGBColor};

use crate::chart::{compute_range, Paddings, ProjectionParams};
use crate::config::ColorTable;
use crate::domain::CanonicalRecord;

// Logical 800x600 chart rendered at a fixed 2x upscale for output crispness.
const PNG_WIDTH: u32 = 1600;
const PNG_HEIGHT: u32 = 1200;
const PNG_PADDINGS: Paddings = Paddings {
    top: 40.0,
    bottom: 48.0,
    left: 40.0,
    right: 96.0,
};

const GRID: RGBColor = RGBColor(208, 208, 208);
const GRID_FAINT: RGBColor = RGBColor(232, 232, 232);
const GRID_CENTER: RGBColor = RGBColor(187, 187, 187);
const LABEL: RGBColor = RGBColor(153, 153, 153);
const ORIGIN: RGBColor = RGBColor(52, 152, 219);

/// Renders the current chart into a PNG over an opaque white background.
///
/// Reuses the exact grid bounds and projection math the live canvas uses,
/// refit to the bitmap's pixel space. Returns the path written.
pub fn export_png(
    records: &[CanonicalRecord],
    colors: &ColorTable,
    path: Option<&Path>,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(eyre!("no records to export"));
    }

    let path = path.map_or_else(
        || PathBuf::from(format!("pir_chart_{}.png", super::timestamp())),
        Path::to_path_buf,
    );

    draw_chart(&path, records, colors).map_err(|e| eyre!("png export failed: {e}"))?;
    Ok(path)
}

#[allow(clippy::cast_possible_truncation)]
fn px(value: f64) -> i32 {
    value.round() as i32
}

fn draw_chart(
    path: &Path,
    records: &[CanonicalRecord],
    colors: &ColorTable,
) -> std::result::Result<(), Box<dyn Error>> {
    let spec = compute_range(records);
    let params = ProjectionParams::fit(&spec, f64::from(PNG_WIDTH), f64::from(PNG_HEIGHT), PNG_PADDINGS)
        .ok_or("degenerate export surface")?;

    let root = BitMapBackend::new(path, (PNG_WIDTH, PNG_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let arc_point = |distance: f64, angle_deg: f64| {
        let rad = angle_deg.to_radians();
        let (x, y) = params.to_screen(distance * rad.sin(), distance * rad.cos());
        (px(x), px(y))
    };

    // Distance arcs with their right-edge labels.
    let label_font = ("sans-serif", 20).into_font().color(&LABEL);
    let mut d = spec.distance_step;
    while d <= spec.max_distance + 1e-9 {
        let sweep: Vec<(i32, i32)> = sample_angles(spec.max_angle_deg)
            .map(|a| arc_point(d, a))
            .collect();
        root.draw(&PathElement::new(sweep, GRID.stroke_width(1)))?;

        let (end_x, end_y) = arc_point(d, spec.max_angle_deg);
        root.draw(&Text::new(
            distance_label(d),
            (end_x + 8, end_y - 8),
            label_font.clone(),
        ))?;

        d = ((d + spec.distance_step) * 100.0).round() / 100.0;
    }

    // Angle rays: the 0° center line heaviest, 10° multiples above 5°.
    let (ox, oy) = (px(params.origin_x), px(params.origin_y));
    #[allow(clippy::cast_possible_truncation)]
    let max_step = (spec.max_angle_deg / 5.0).round() as i32;
    for step in -max_step..=max_step {
        let a = f64::from(step) * 5.0;
        let style = if step == 0 {
            GRID_CENTER.stroke_width(3)
        } else if step % 2 == 0 {
            GRID.stroke_width(2)
        } else {
            GRID_FAINT.stroke_width(1)
        };
        let end = arc_point(spec.max_distance, a);
        root.draw(&PathElement::new(vec![(ox, oy), end], style))?;

        if step != 0 && step % 2 == 0 {
            let rad = a.to_radians();
            let label_r = spec.max_distance * params.scale + 8.0;
            let lx = params.origin_x + label_r * rad.sin();
            let ly = params.origin_y - label_r * rad.cos();
            root.draw(&Text::new(
                format!("{a:.0}°"),
                (px(lx) - 12, px(ly) - 20),
                label_font.clone(),
            ))?;
        }
    }

    // 0° label above the outer arc.
    let (zx, zy) = arc_point(spec.max_distance, 0.0);
    root.draw(&Text::new("0°", (zx - 8, zy - 28), label_font.clone()))?;

    // Sensor glyph at the origin.
    let ds = 12;
    root.draw(&Polygon::new(
        vec![(ox, oy - ds), (ox + ds, oy + ds / 2), (ox - ds, oy + ds / 2)],
        ORIGIN.filled(),
    ))?;

    // Data points above the grid, outlined for contrast.
    for record in records {
        let (sx, sy) = params.project_record(record);
        let (r, g, b) = colors.rgb(record.trigger);
        let fill = RGBColor(r, g, b);
        root.draw(&Circle::new((px(sx), px(sy)), 11, fill.filled()))?;
        root.draw(&Circle::new((px(sx), px(sy)), 11, WHITE.stroke_width(2)))?;
    }

    root.present()?;
    Ok(())
}

/// Arc sample positions from -max to +max inclusive, one per degree.
#[allow(clippy::cast_possible_truncation)]
fn sample_angles(max_angle_deg: f64) -> impl Iterator<Item = f64> {
    let steps = (max_angle_deg * 2.0).round() as i32;
    (0..=steps).map(move |i| -max_angle_deg + f64::from(i))
}

/// Arc labels are integer-formatted when whole, one decimal otherwise.
fn distance_label(distance: f64) -> String {
    if (distance.fract()).abs() < 1e-9 {
        format!("{distance:.0}m")
    } else {
        format!("{distance:.1}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_labels_format_by_wholeness() {
        assert_eq!(distance_label(3.0), "3m");
        assert_eq!(distance_label(2.5), "2.5m");
    }

    #[test]
    fn arc_samples_cover_the_full_sweep() {
        let samples: Vec<f64> = sample_angles(55.0).collect();
        assert!((samples[0] + 55.0).abs() < 1e-9);
        assert!((samples[samples.len() - 1] - 55.0).abs() < 1e-9);
    }

    #[test]
    fn empty_record_set_is_refused() {
        assert!(export_png(&[], &ColorTable::default(), None).is_err());
    }
}
