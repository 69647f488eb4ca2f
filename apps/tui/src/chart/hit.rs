use crate::domain::CanonicalRecord;

use super::projection::ProjectionParams;

/// Hover pickup radius in surface pixels.
pub const HOVER_RADIUS_PX: f64 = 12.0;

/// Finds the record nearest to the pointer, if any lies strictly within
/// `max_px_radius`.
///
/// Uses the cached projection parameters from the last render; with no
/// params (empty record set or degenerate canvas) there is nothing to hit.
pub fn find_nearest(
    pointer_x: f64,
    pointer_y: f64,
    records: &[CanonicalRecord],
    params: Option<&ProjectionParams>,
    max_px_radius: f64,
) -> Option<usize> {
    let params = params?;

    let mut best: Option<usize> = None;
    let mut best_distance = max_px_radius;
    for (index, record) in records.iter().enumerate() {
        let (px, py) = params.project_record(record);
        let distance = (pointer_x - px).hypot(pointer_y - py);
        if distance < best_distance {
            best_distance = distance;
            best = Some(index);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TriggerLevel;

    fn params() -> ProjectionParams {
        ProjectionParams {
            origin_x: 100.0,
            origin_y: 100.0,
            scale: 10.0,
            width: 200.0,
            height: 110.0,
        }
    }

    fn record(distance: f64, angle_deg: f64) -> CanonicalRecord {
        CanonicalRecord::new(distance, angle_deg, TriggerLevel::MAX)
    }

    #[test]
    fn empty_record_set_hits_nothing() {
        assert!(find_nearest(100.0, 50.0, &[], Some(&params()), HOVER_RADIUS_PX).is_none());
    }

    #[test]
    fn absent_params_hit_nothing() {
        let records = [record(1.0, 0.0)];
        assert!(find_nearest(100.0, 90.0, &records, None, HOVER_RADIUS_PX).is_none());
    }

    #[test]
    fn exact_pointer_position_hits_the_point() {
        let records = [record(3.0, 0.0), record(5.0, 40.0)];
        let p = params();
        let (px, py) = p.project_record(&records[0]);
        assert_eq!(
            find_nearest(px, py, &records, Some(&p), HOVER_RADIUS_PX),
            Some(0)
        );
    }

    #[test]
    fn nearest_of_two_close_points_wins() {
        let records = [record(3.0, 0.0), record(3.4, 0.0)];
        let p = params();
        // 3.0m projects to y=70, 3.4m to y=66; probe at y=69.
        assert_eq!(
            find_nearest(100.0, 69.0, &records, Some(&p), HOVER_RADIUS_PX),
            Some(0)
        );
        assert_eq!(
            find_nearest(100.0, 67.0, &records, Some(&p), HOVER_RADIUS_PX),
            Some(1)
        );
    }

    #[test]
    fn points_outside_the_radius_are_ignored() {
        let records = [record(3.0, 0.0)];
        let p = params();
        let (px, py) = p.project_record(&records[0]);
        assert!(find_nearest(px + 20.0, py, &records, Some(&p), HOVER_RADIUS_PX).is_none());
        // The bound is strict: exactly at the radius is a miss.
        assert!(find_nearest(px + HOVER_RADIUS_PX, py, &records, Some(&p), HOVER_RADIUS_PX)
            .is_none());
    }
}
