// Ingestion pipeline: decoded table -> resolved columns -> canonical records.

pub mod decode;
pub mod fields;
pub mod normalize;

use std::path::Path;

use crate::domain::CanonicalRecord;

pub use decode::{decode_file, RawTable};
pub use fields::{resolve_columns, ResolvedColumns};
pub use normalize::normalize;

/// Everything that can go wrong between a file path and a record set.
///
/// None of these commit partial state: on any error the caller keeps its
/// previous records.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unsupported file format `.{extension}` (supported: csv)")]
    UnsupportedFormat { extension: String },

    #[error("failed to read input: {0}")]
    Decode(#[from] csv::Error),

    #[error("could not identify the {field} column; available columns: {}", headers.join(", "))]
    UnresolvableSchema {
        field: &'static str,
        headers: Vec<String>,
    },

    #[error("no usable rows in input")]
    EmptyInput,

    #[error("ingestion task failed: {0}")]
    Internal(String),
}

/// Runs the whole pipeline for one file.
///
/// This is the body of the background ingest task; it is also called
/// directly for one-shot CLI ingestion.
pub fn ingest_file(path: &Path) -> Result<Vec<CanonicalRecord>, IngestError> {
    let table = decode_file(path)?;
    let columns = resolve_columns(&table.headers)?;
    normalize(&table, &columns)
}
