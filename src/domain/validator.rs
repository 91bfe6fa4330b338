// src/domain/validator.rs
//! Row validation against field constraints. All-or-nothing: any error
//! rejects the whole import before persistence.

use crate::domain::import::{ColumnMapping, ImportValidationResult, RowError, VendorField};
use crate::domain::vendor::{parse_currency, parse_date, parse_flag};

/// 1-based file row of the first data row; row 1 is the header row.
pub const FIRST_DATA_ROW: usize = 2;

/// Validates every mapped row.
///
/// A row fails when its name cell is empty, or when a typed cell (cost,
/// booked flag, booking date) has content that does not parse. An empty cell
/// is always acceptable; the field is simply absent. Row numbers in the
/// errors reference the original file row for user-facing reporting.
pub fn validate_rows(rows: &[Vec<String>], mapping: &ColumnMapping) -> ImportValidationResult {
    let mut errors = Vec::new();

    if !mapping.contains(VendorField::Name) {
        errors.push(RowError {
            row: 1,
            message: "required column 'name' is not mapped from the file headers".to_string(),
        });
        return ImportValidationResult { errors };
    }

    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx + FIRST_DATA_ROW;

        if mapping.cell(row, VendorField::Name).is_none() {
            errors.push(RowError {
                row: row_num,
                message: "missing required field 'name'".to_string(),
            });
        }

        if let Some(raw) = mapping.cell(row, VendorField::EstimatedCost) {
            if let Err(e) = parse_currency(raw) {
                errors.push(RowError {
                    row: row_num,
                    message: e.to_string(),
                });
            }
        }

        if let Some(raw) = mapping.cell(row, VendorField::Booked) {
            if let Err(e) = parse_flag(raw) {
                errors.push(RowError {
                    row: row_num,
                    message: e.to_string(),
                });
            }
        }

        if let Some(raw) = mapping.cell(row, VendorField::BookingDate) {
            if let Err(e) = parse_date(raw) {
                errors.push(RowError {
                    row: row_num,
                    message: e.to_string(),
                });
            }
        }
    }

    ImportValidationResult { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column_mapper::map_columns;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn mapping(headers: &[&str]) -> ColumnMapping {
        map_columns(&headers.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_valid_rows_pass() {
        let mapping = mapping(&["Name", "Cost", "Booked", "Booking Date"]);
        let result = validate_rows(
            &rows(&[&["Acme", "$1,200", "yes", "2026-06-14"]]),
            &mapping,
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_empty_name_cell_reports_file_row() {
        let mapping = mapping(&["Name"]);
        let result = validate_rows(&rows(&[&["Acme"], &[""], &["Bob"]]), &mapping);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        // second data row sits at file row 3 (header is row 1)
        assert_eq!(result.errors[0].row, 3);
        assert!(result.errors[0].message.contains("name"));
    }

    #[test]
    fn test_unmapped_name_column_is_a_single_error() {
        let mapping = mapping(&["Favorite Color"]);
        let result = validate_rows(&rows(&[&["red"], &["blue"]]), &mapping);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message.contains("not mapped"));
    }

    #[test]
    fn test_unparseable_typed_cells_fail() {
        let mapping = mapping(&["Name", "Cost", "Booked", "Booking Date"]);
        let result = validate_rows(
            &rows(&[&["Acme", "cheap", "maybe", "next June"]]),
            &mapping,
        );
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().all(|e| e.row == 2));
    }

    #[test]
    fn test_empty_typed_cells_are_acceptable() {
        let mapping = mapping(&["Name", "Cost", "Booked", "Booking Date"]);
        let result = validate_rows(&rows(&[&["Acme", "", "", ""]]), &mapping);
        assert!(result.is_valid());
    }

    #[test]
    fn test_short_rows_are_acceptable() {
        // flexible CSV rows may carry fewer cells than headers
        let mapping = mapping(&["Name", "Cost"]);
        let result = validate_rows(&rows(&[&["Acme"]]), &mapping);
        assert!(result.is_valid());
    }
}
