// src/infrastructure/parsers/xlsx_parser.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::import::ImportPreview;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Parses the first sheet of an Excel workbook. The first row is taken as
/// the header row.
pub(crate) fn parse_xlsx_file(path: &Path) -> DomainResult<ImportPreview> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| DomainError::Parse(format!("cannot open '{}': {}", path.display(), e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| DomainError::Parse("workbook has no sheets".to_string()))?
        .clone();

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| DomainError::Parse(format!("cannot read sheet '{}': {}", first_sheet, e)))?;

    let mut all_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    if all_rows.is_empty() {
        return Err(DomainError::Parse(format!(
            "sheet '{}' is empty",
            first_sheet
        )));
    }

    let headers = all_rows.remove(0);
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DomainError::Parse("workbook has no header row".to_string()));
    }

    Ok(ImportPreview {
        file_name: super::file_name(path),
        headers,
        total_rows: all_rows.len(),
        rows: all_rows,
    })
}

/// Renders a cell the way it would appear in a CSV export, so downstream
/// parsing treats both formats identically.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            // integers stored as floats must not render a trailing ".0"
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.date().to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("ERROR: {:?}", e),
    }
}
