use std::path::Path;

use csv::ReaderBuilder;

use super::IngestError;

/// Decoded tabular input, before any schema resolution.
///
/// `rows` are aligned to `headers`; short rows are padded with empty cells by
/// the csv reader configuration below.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// Reads a tabular file into a [`RawTable`].
///
/// Only CSV is decoded here; spreadsheet formats are rejected up front so
/// the user gets a format error instead of a parse error.
pub fn decode_file(path: &Path) -> Result<RawTable, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "csv" {
        return Err(IngestError::UnsupportedFormat { extension });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        if row.iter().any(|cell| !cell.trim().is_empty()) {
            rows.push(row);
        }
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("pirscope_decode_{name}"));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn rejects_non_csv_extensions() {
        let err = decode_file(Path::new("readings.xlsx")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { ref extension } if extension == "xlsx"
        ));
    }

    #[test]
    fn decodes_headers_and_skips_blank_lines() {
        let path = write_temp("basic.csv", "distance,angle\n1.5,10\n,\n2.0,-5\n");
        let table = decode_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.headers, vec!["distance", "angle"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["2.0", "-5"]);
    }
}
