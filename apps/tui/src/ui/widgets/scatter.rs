use ratatui::style::Color;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Circle, Context, Line as CanvasLine, Points};

use crate::chart::{GridSpec, ProjectionParams};
use crate::config::ColorTable;
use crate::domain::{CanonicalRecord, TriggerLevel};

/// Arcs are sampled into short segments at this angular resolution.
const ARC_SAMPLE_STEP_DEG: f64 = 2.0;

const ARC_COLOR: Color = Color::DarkGray;
const RAY_FAINT: Color = Color::Rgb(64, 64, 64);
const RAY_EMPHASIS: Color = Color::DarkGray;
const RAY_CENTER: Color = Color::Gray;
const LABEL_COLOR: Color = Color::Gray;
const ORIGIN_COLOR: Color = Color::LightBlue;

pub fn level_color(colors: &ColorTable, level: TriggerLevel) -> Color {
    let (r, g, b) = colors.rgb(level);
    Color::Rgb(r, g, b)
}

/// Projection params keep screen y growing downward; the canvas coordinate
/// system grows upward, so painting flips once here.
fn flip(params: &ProjectionParams, screen_y: f64) -> f64 {
    params.height - screen_y
}

/// Paints the polar reference grid: distance arcs with labels, angle rays
/// (center emphasized, 10° multiples over 5°), the 0° label and the sensor
/// glyph at the origin.
pub fn draw_grid(ctx: &mut Context<'_>, spec: &GridSpec, params: &ProjectionParams) {
    let mut d = spec.distance_step;
    while d <= spec.max_distance + 1e-9 {
        draw_arc(ctx, spec, params, d);

        let rad = spec.max_angle_rad();
        let (lx, ly) = params.to_screen(d * rad.sin(), d * rad.cos());
        ctx.print(
            lx + 2.0,
            flip(params, ly),
            TextLine::styled(distance_label(d), LABEL_COLOR),
        );

        d = ((d + spec.distance_step) * 100.0).round() / 100.0;
    }

    #[allow(clippy::cast_possible_truncation)]
    let max_step = (spec.max_angle_deg / 5.0).round() as i32;
    for step in -max_step..=max_step {
        let a = f64::from(step) * 5.0;
        let rad = a.to_radians();
        let color = if step == 0 {
            RAY_CENTER
        } else if step % 2 == 0 {
            RAY_EMPHASIS
        } else {
            RAY_FAINT
        };

        let (ex, ey) = params.to_screen(spec.max_distance * rad.sin(), spec.max_distance * rad.cos());
        ctx.draw(&CanvasLine {
            x1: params.origin_x,
            y1: flip(params, params.origin_y),
            x2: ex,
            y2: flip(params, ey),
            color,
        });

        // Angle labels only at nonzero 10° multiples, just past the outer arc.
        if step != 0 && step % 2 == 0 {
            let r = spec.max_distance * params.scale + 2.0;
            let lx = params.origin_x + r * rad.sin();
            let ly = params.origin_y - r * rad.cos();
            ctx.print(
                lx - 1.0,
                flip(params, ly),
                TextLine::styled(format!("{a:.0}°"), LABEL_COLOR),
            );
        }
    }

    let (zx, zy) = params.to_screen(0.0, spec.max_distance);
    ctx.print(
        zx - 1.0,
        flip(params, zy) + 3.0,
        TextLine::styled("0°", LABEL_COLOR),
    );

    draw_origin_glyph(ctx, params);
}

/// Paints every record's projected point, colored by trigger level and
/// ringed in white for contrast. Must run after [`draw_grid`] within the
/// same frame so points sit above grid lines.
pub fn draw_points(
    ctx: &mut Context<'_>,
    records: &[CanonicalRecord],
    params: &ProjectionParams,
    colors: &ColorTable,
) {
    for record in records {
        let (sx, sy) = params.project_record(record);
        let (x, y) = (sx, flip(params, sy));
        let color = level_color(colors, record.trigger);

        ctx.draw(&Circle {
            x,
            y,
            radius: 2.5,
            color: Color::White,
        });
        ctx.draw(&Circle {
            x,
            y,
            radius: 1.4,
            color,
        });
        ctx.draw(&Points {
            coords: &[(x, y)],
            color,
        });
    }
}

fn draw_arc(ctx: &mut Context<'_>, spec: &GridSpec, params: &ProjectionParams, distance: f64) {
    #[allow(clippy::cast_possible_truncation)]
    let steps = (spec.max_angle_deg * 2.0 / ARC_SAMPLE_STEP_DEG).round() as i32;
    let mut prev: Option<(f64, f64)> = None;
    for i in 0..=steps {
        let a = (-spec.max_angle_deg + f64::from(i) * ARC_SAMPLE_STEP_DEG).to_radians();
        let (sx, sy) = params.to_screen(distance * a.sin(), distance * a.cos());
        let point = (sx, flip(params, sy));
        if let Some((px, py)) = prev {
            ctx.draw(&CanvasLine {
                x1: px,
                y1: py,
                x2: point.0,
                y2: point.1,
                color: ARC_COLOR,
            });
        }
        prev = Some(point);
    }
}

/// Small upward triangle marking the sensor position.
fn draw_origin_glyph(ctx: &mut Context<'_>, params: &ProjectionParams) {
    let ox = params.origin_x;
    let oy = flip(params, params.origin_y);
    let ds = 3.0;
    let apex = (ox, oy + ds);
    let left = (ox - ds, oy - ds * 0.6);
    let right = (ox + ds, oy - ds * 0.6);
    for (from, to) in [(apex, right), (right, left), (left, apex)] {
        ctx.draw(&CanvasLine {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color: ORIGIN_COLOR,
        });
    }
}

/// Arc labels are integer-formatted when whole, one decimal otherwise.
fn distance_label(distance: f64) -> String {
    if distance.fract().abs() < 1e-9 {
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
        assert_eq!(distance_label(2.0), "2m");
        assert_eq!(distance_label(2.5), "2.5m");
        assert_eq!(distance_label(13.0), "13m");
    }
}
