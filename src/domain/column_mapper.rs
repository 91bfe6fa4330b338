// src/domain/column_mapper.rs
//! Header inference: which source column feeds which vendor field.

use crate::domain::import::{ColumnMapping, VendorField};

/// Infers a best-effort mapping from file headers to vendor fields.
///
/// Comparison is case-insensitive with whitespace and punctuation stripped,
/// so "Vendor Name", "vendor_name" and "VENDOR-NAME" all map to the name
/// field. Headers that match nothing are ignored. Cannot fail; in the worst
/// case nothing maps and validation reports the missing required column.
pub fn map_columns(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();
    for (idx, header) in headers.iter().enumerate() {
        let key = normalize_header(header);
        if key.is_empty() {
            continue;
        }
        if let Some(field) = field_for_key(&key) {
            mapping.claim(field, idx);
        }
    }
    mapping
}

/// Lowercase and drop everything that is not alphanumeric.
fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn field_for_key(key: &str) -> Option<VendorField> {
    VendorField::ALL
        .iter()
        .copied()
        .find(|field| field.synonyms().contains(&key))
}
