// src/infrastructure/parsers/mod.rs
//! File parsing adapters: CSV via the `csv` crate, Excel via `calamine`.

mod csv_parser;
mod xlsx_parser;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::import::ImportPreview;
use crate::domain::repositories::import_repository::ImportSourceRepository;
use std::path::Path;

/// Format-dispatching import source: picks the parser from the file
/// extension.
#[derive(Debug, Default)]
pub struct FileImportSource;

impl FileImportSource {
    pub fn new() -> Self {
        Self
    }
}

impl ImportSourceRepository for FileImportSource {
    fn parse_preview(&self, path: &Path) -> DomainResult<ImportPreview> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => csv_parser::parse_csv_file(path),
            "xlsx" | "xls" | "xlsm" => xlsx_parser::parse_xlsx_file(path),
            other => Err(DomainError::UnsupportedFormat(format!(
                "'{}' (expected .csv or .xlsx)",
                other
            ))),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_is_rejected() {
        let source = FileImportSource::new();
        let err = source.parse_preview(Path::new("vendors.pdf")).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedFormat(_)));
    }
}
