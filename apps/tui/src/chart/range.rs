use crate::domain::CanonicalRecord;

/// Derived grid bounds for one render of the record set. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GridSpec {
    /// Outermost arc, one step beyond the largest observed distance.
    pub max_distance: f64,
    pub distance_step: f64,
    /// Half-sweep of the angular fan, capped at 90°.
    pub max_angle_deg: f64,
}

impl GridSpec {
    pub fn max_angle_rad(&self) -> f64 {
        self.max_angle_deg.to_radians()
    }
}

/// Distance between arcs, picked by the raw observed maximum before padding.
fn distance_step_for(raw_max: f64) -> f64 {
    if raw_max <= 8.0 {
        0.5
    } else if raw_max <= 15.0 {
        1.0
    } else {
        2.0
    }
}

/// Derives grid bounds from the record set.
///
/// Floors: distance 1, angle 45°. The angle bound rounds up to the next 5°
/// multiple plus a 10° margin, capped at 90°; the distance bound rounds up
/// to the next step and pads one extra step so the outermost point never
/// touches the grid edge.
pub fn compute_range(records: &[CanonicalRecord]) -> GridSpec {
    let mut raw_max_distance: f64 = 1.0;
    let mut raw_max_angle: f64 = 45.0;
    for record in records {
        raw_max_distance = raw_max_distance.max(record.distance);
        raw_max_angle = raw_max_angle.max(record.angle_deg.abs());
    }

    let max_angle_deg = ((raw_max_angle / 5.0).ceil() * 5.0 + 10.0).min(90.0);

    let step = distance_step_for(raw_max_distance);
    let max_distance = (raw_max_distance / step).ceil() * step + step;

    GridSpec {
        max_distance,
        distance_step: step,
        max_angle_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TriggerLevel;

    fn record(distance: f64, angle_deg: f64) -> CanonicalRecord {
        CanonicalRecord::new(distance, angle_deg, TriggerLevel::MAX)
    }

    #[test]
    fn empty_set_uses_floors() {
        let spec = compute_range(&[]);
        assert!((spec.distance_step - 0.5).abs() < f64::EPSILON);
        assert!((spec.max_distance - 1.5).abs() < f64::EPSILON);
        assert!((spec.max_angle_deg - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn step_buckets_follow_raw_maximum() {
        assert!((compute_range(&[record(2.0, 0.0)]).distance_step - 0.5).abs() < f64::EPSILON);
        assert!((compute_range(&[record(7.9, 0.0)]).distance_step - 0.5).abs() < f64::EPSILON);
        assert!((compute_range(&[record(12.0, 0.0)]).distance_step - 1.0).abs() < f64::EPSILON);
        assert!((compute_range(&[record(20.0, 0.0)]).distance_step - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_padded_one_step_past_the_maximum() {
        let spec = compute_range(&[record(12.0, 30.0)]);
        assert!((spec.distance_step - 1.0).abs() < f64::EPSILON);
        assert!((spec.max_distance - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_distance_is_strictly_greater_than_observed() {
        for d in [0.3, 1.0, 2.5, 8.0, 13.0, 15.0, 40.0] {
            let spec = compute_range(&[record(d, 0.0)]);
            assert!(spec.max_distance > d, "max {} for observed {d}", spec.max_distance);
        }
    }

    #[test]
    fn angle_floor_dominates_small_sweeps() {
        // Observed 30° is below the 45° floor, so the bound comes out at
        // ceil(45/5)*5 + 10 = 55.
        let spec = compute_range(&[record(12.0, 30.0)]);
        assert!((spec.max_angle_deg - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn angle_rounds_up_to_five_and_adds_margin() {
        let spec = compute_range(&[record(1.0, -61.0)]);
        assert!((spec.max_angle_deg - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn angle_never_exceeds_ninety() {
        for a in [80.0, 90.0, 120.0, 720.0] {
            let spec = compute_range(&[record(1.0, a)]);
            assert!(spec.max_angle_deg <= 90.0);
        }
    }
}
