use crate::domain::{CanonicalRecord, TriggerLevel};

use super::decode::RawTable;
use super::fields::ResolvedColumns;
use super::IngestError;

/// Tokens accepted as "the sensor fired" in boolean trigger columns.
const TRUTHY_TOKENS: &[&str] = &["是", "yes", "true", "triggered", "触发", "pass"];

fn parse_finite(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a trigger cell into a level.
///
/// Numeric values clamp into 0..=5 (fractions truncate toward zero, like the
/// prefix-parsing spreadsheets these files come from); known truthy tokens
/// map to the maximal level; anything else counts as "did not fire".
pub fn parse_trigger(cell: &str) -> TriggerLevel {
    let token = cell.trim().to_lowercase();
    if let Ok(n) = token.parse::<i64>() {
        return TriggerLevel::clamp(n);
    }
    if let Ok(f) = token.parse::<f64>() {
        if f.is_finite() {
            return TriggerLevel::clamp(f.trunc() as i64);
        }
    }
    if TRUTHY_TOKENS.contains(&token.as_str()) {
        TriggerLevel::MAX
    } else {
        TriggerLevel::MIN
    }
}

/// Converts a decoded table into canonical records.
///
/// Rows whose distance or angle fail to parse are dropped silently; the
/// whole ingestion fails only when nothing at all survives.
pub fn normalize(
    table: &RawTable,
    columns: &ResolvedColumns,
) -> Result<Vec<CanonicalRecord>, IngestError> {
    if table.rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let distance_idx = table.column_index(&columns.distance);
    let angle_idx = table.column_index(&columns.angle);
    let trigger_idx = columns
        .trigger
        .as_deref()
        .and_then(|h| table.column_index(h));

    let cell = |row: &[String], idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| row.get(i).cloned())
    };

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let Some(distance) = cell(row, distance_idx).as_deref().and_then(parse_finite) else {
            continue;
        };
        let Some(angle_deg) = cell(row, angle_idx).as_deref().and_then(parse_finite) else {
            continue;
        };

        // No trigger column resolved: default every record to "always fired".
        let trigger = match trigger_idx {
            Some(idx) => row
                .get(idx)
                .map_or(TriggerLevel::MIN, |c| parse_trigger(c)),
            None => TriggerLevel::MAX,
        };

        records.push(CanonicalRecord::new(distance, angle_deg, trigger));
    }

    if records.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    Ok(records)
}
