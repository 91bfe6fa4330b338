// src/infrastructure/parsers/csv_parser.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::import::ImportPreview;
use crate::domain::validator::FIRST_DATA_ROW;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parses a CSV file into headers and trimmed rows.
///
/// The reader is flexible: rows may carry fewer or more cells than the
/// header row; downstream mapping ignores the surplus.
pub(crate) fn parse_csv_file(path: &Path) -> DomainResult<ImportPreview> {
    let file = File::open(path)
        .map_err(|e| DomainError::Parse(format!("cannot open '{}': {}", path.display(), e)))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DomainError::Parse(format!("cannot read CSV headers: {}", e)))?
        .iter()
        .map(|s| s.to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DomainError::Parse("CSV file has no header row".to_string()));
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            DomainError::Parse(format!("row {}: {}", idx + FIRST_DATA_ROW, e))
        })?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(ImportPreview {
        file_name: super::file_name(path),
        headers,
        total_rows: rows.len(),
        rows,
    })
}
