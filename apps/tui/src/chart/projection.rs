use crate::domain::CanonicalRecord;

use super::range::GridSpec;

/// Rounds plottable coordinates to two decimals so hover comparisons and
/// exports stay stable across recomputation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Polar (distance, signed angle) to plane coordinates.
///
/// Angle 0 points along the sensor's forward axis (plane +y); positive
/// angles sweep toward plane +x. Distance only ever moves a point further
/// out along its ray.
pub fn project(distance: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (round2(distance * rad.sin()), round2(distance * rad.cos()))
}

/// Recovers (distance, angle) from plane coordinates; test/debug inverse of
/// [`project`].
pub fn unproject(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), x.atan2(y).to_degrees())
}

/// Margins reserved around the fan for edge labels, in surface pixels.
#[derive(Debug, Clone, Copy)]
pub struct Paddings {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Paddings {
    /// Margins for the Braille canvas (one terminal cell is 2x4 of these
    /// pixels; the right side leaves room for arc labels).
    pub const CANVAS: Self = Self {
        top: 5.0,
        bottom: 6.0,
        left: 5.0,
        right: 14.0,
    };
}

/// The cached geometric mapping from sensor space to surface pixels for the
/// current frame. Surface y grows downward; the canvas widget flips once
/// more at its paint boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Pixels per distance unit; always > 0.
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl ProjectionParams {
    /// Fits the grid into a surface of the given pixel size.
    ///
    /// The origin sits horizontally centered, anchored near the bottom. The
    /// scale is the minimum of the vertical fit (full distance range) and
    /// the horizontal fit (full angular sweep at maximum distance), so
    /// neither axis distorts or overflows. Returns `None` for degenerate
    /// surfaces.
    pub fn fit(spec: &GridSpec, width: f64, height: f64, pad: Paddings) -> Option<Self> {
        let avail_h = height - pad.top - pad.bottom;
        let avail_w = width - pad.left - pad.right;
        if avail_h <= 0.0 || avail_w <= 0.0 {
            return None;
        }

        let scale_y = avail_h / spec.max_distance;
        let half_width = spec.max_distance * spec.max_angle_rad().sin();
        let scale_x = avail_w / (2.0 * half_width);
        let scale = scale_y.min(scale_x);
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }

        Some(Self {
            origin_x: width / 2.0,
            origin_y: height - pad.bottom,
            scale,
            width,
            height,
        })
    }

    /// Plane coordinates to surface pixels (y inverted: screen y grows
    /// downward while plane y points away from the sensor).
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.origin_x + x * self.scale,
            self.origin_y - y * self.scale,
        )
    }

    /// Projects one record straight to surface pixels.
    pub fn project_record(&self, record: &CanonicalRecord) -> (f64, f64) {
        let (x, y) = project(record.distance, record.angle_deg);
        self.to_screen(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::range::compute_range;
    use crate::domain::TriggerLevel;

    #[test]
    fn zero_angle_projects_straight_ahead() {
        let (x, y) = project(4.0, 0.0);
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn positive_angle_sweeps_toward_positive_x() {
        let (x, y) = project(2.0, 30.0);
        assert!(x > 0.0);
        assert!(y > 0.0);
        let (x_neg, _) = project(2.0, -30.0);
        assert!((x + x_neg).abs() < 1e-9);
    }

    #[test]
    fn projection_round_trips_within_rounding_tolerance() {
        for &(d, a) in &[(1.0, 0.0), (3.5, 12.0), (10.0, -45.0), (7.25, 89.0)] {
            let (x, y) = project(d, a);
            let (d2, a2) = unproject(x, y);
            assert!((d - d2).abs() <= 0.02, "distance {d} -> {d2}");
            assert!((a - a2).abs() <= 0.5, "angle {a} -> {a2}");
        }
    }

    #[test]
    fn outputs_are_rounded_to_two_decimals() {
        let (x, y) = project(1.0, 33.0);
        assert!((x * 100.0 - (x * 100.0).round()).abs() < 1e-9);
        assert!((y * 100.0 - (y * 100.0).round()).abs() < 1e-9);
    }

    #[test]
    fn fit_centers_origin_and_anchors_bottom() {
        let spec = compute_range(&[CanonicalRecord::new(4.0, 20.0, TriggerLevel::MAX)]);
        let params = ProjectionParams::fit(&spec, 200.0, 120.0, Paddings::CANVAS).unwrap();
        assert!((params.origin_x - 100.0).abs() < f64::EPSILON);
        assert!((params.origin_y - (120.0 - Paddings::CANVAS.bottom)).abs() < f64::EPSILON);
        assert!(params.scale > 0.0);
    }

    #[test]
    fn fit_keeps_the_widest_sweep_inside_the_surface() {
        let spec = compute_range(&[CanonicalRecord::new(10.0, 88.0, TriggerLevel::MAX)]);
        let params = ProjectionParams::fit(&spec, 200.0, 120.0, Paddings::CANVAS).unwrap();
        let half = spec.max_distance * spec.max_angle_rad().sin() * params.scale;
        assert!(params.origin_x + half <= 200.0 - Paddings::CANVAS.right + 1e-9);
        assert!(params.origin_x - half >= Paddings::CANVAS.left - 1e-9);
    }

    #[test]
    fn fit_rejects_degenerate_surfaces() {
        let spec = compute_range(&[]);
        assert!(ProjectionParams::fit(&spec, 6.0, 4.0, Paddings::CANVAS).is_none());
        assert!(ProjectionParams::fit(&spec, 0.0, 0.0, Paddings::CANVAS).is_none());
    }

    #[test]
    fn screen_mapping_inverts_y() {
        let params = ProjectionParams {
            origin_x: 50.0,
            origin_y: 100.0,
            scale: 10.0,
            width: 100.0,
            height: 110.0,
        };
        let (sx, sy) = params.to_screen(1.0, 2.0);
        assert!((sx - 60.0).abs() < f64::EPSILON);
        assert!((sy - 80.0).abs() < f64::EPSILON);
    }
}
