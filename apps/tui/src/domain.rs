use serde::Serialize;

/// How many times a sensor fired for a reading, graded 0..=5.
///
/// Some sources report a plain pass/fail instead of a count; those collapse
/// to `MIN`/`MAX` during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TriggerLevel(u8);

impl TriggerLevel {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(5);

    /// Number of distinct levels (0 through 5).
    pub const COUNT: usize = 6;

    /// Clamps an arbitrary integer into the valid 0..=5 range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp(value: i64) -> Self {
        Self(value.clamp(0, 5) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into the color table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn next(self) -> Self {
        Self::clamp(i64::from(self.0) + 1)
    }

    pub fn prev(self) -> Self {
        Self::clamp(i64::from(self.0) - 1)
    }

    /// Display form used in tables, tooltips and exports, e.g. `3/5`.
    pub fn label(self) -> String {
        format!("{}/5", self.0)
    }
}

/// One normalized sensor reading.
///
/// Distance and angle are guaranteed finite: rows that fail numeric parsing
/// never become records, and the table editor substitutes 0.0 for
/// unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanonicalRecord {
    /// Distance from the sensor, in meters.
    pub distance: f64,
    /// Signed angle off the sensor's forward axis, in degrees.
    pub angle_deg: f64,
    pub trigger: TriggerLevel,
}

impl CanonicalRecord {
    pub const fn new(distance: f64, angle_deg: f64, trigger: TriggerLevel) -> Self {
        Self {
            distance,
            angle_deg,
            trigger,
        }
    }

    /// The row appended by the "add row" action.
    pub const fn placeholder() -> Self {
        Self::new(3.0, 0.0, TriggerLevel::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_level_clamps_out_of_range_values() {
        assert_eq!(TriggerLevel::clamp(9).get(), 5);
        assert_eq!(TriggerLevel::clamp(-2).get(), 0);
        assert_eq!(TriggerLevel::clamp(3).get(), 3);
    }

    #[test]
    fn trigger_level_cycling_saturates() {
        assert_eq!(TriggerLevel::MAX.next(), TriggerLevel::MAX);
        assert_eq!(TriggerLevel::MIN.prev(), TriggerLevel::MIN);
        assert_eq!(TriggerLevel::clamp(2).next().get(), 3);
    }

    #[test]
    fn trigger_level_label() {
        assert_eq!(TriggerLevel::clamp(4).label(), "4/5");
    }
}
