use std::path::{Path, PathBuf};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::domain::CanonicalRecord;

/// Writes the record set as a CSV table.
///
/// Column shape mirrors the on-screen table: row number, distance, angle,
/// trigger count. Returns the path written. Refuses an empty record set so
/// callers never produce a header-only file.
pub fn export_csv(records: &[CanonicalRecord], path: Option<&Path>) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(eyre!("no records to export"));
    }

    let path = path.map_or_else(
        || PathBuf::from(format!("pir_data_{}.csv", super::timestamp())),
        Path::to_path_buf,
    );

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["#", "distance(m)", "angle(deg)", "trigger(/5)"])?;
    for (index, record) in records.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            record.distance.to_string(),
            record.angle_deg.to_string(),
            record.trigger.get().to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TriggerLevel;

    #[test]
    fn refuses_empty_record_set() {
        assert!(export_csv(&[], None).is_err());
    }

    #[test]
    fn writes_header_plus_one_line_per_record() {
        let records = [
            CanonicalRecord::new(3.0, 10.0, TriggerLevel::MAX),
            CanonicalRecord::new(5.5, -20.0, TriggerLevel::clamp(2)),
        ];
        let path = std::env::temp_dir().join("pirscope_export_test.csv");
        let written = export_csv(&records, Some(&path)).unwrap();
        let contents = std::fs::read_to_string(&written).unwrap();
        std::fs::remove_file(&written).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "#,distance(m),angle(deg),trigger(/5)");
        assert_eq!(lines[1], "1,3,10,5");
        assert_eq!(lines[2], "2,5.5,-20,2");
    }
}
