// src/domain/import.rs
use crate::domain::vendor::{VendorCandidate, VendorId};
use std::collections::HashMap;
use std::fmt;

/// Import mode, selected once per session and immutable for one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Only create vendors that are not in the store yet. Never deletes,
    /// never touches existing records.
    AddOnly,
    /// Make the store mirror the file: create unmatched candidates, keep
    /// matched vendors, delete vendors absent from the file.
    Sync,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportMode::AddOnly => write!(f, "add-only"),
            ImportMode::Sync => write!(f, "sync"),
        }
    }
}

/// Raw file content after parsing, before mapping and validation.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

/// The closed set of vendor fields an import column can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorField {
    Name,
    Category,
    Email,
    Phone,
    Website,
    Street,
    City,
    State,
    PostalCode,
    EstimatedCost,
    Booked,
    BookingDate,
    Notes,
}

impl VendorField {
    pub const ALL: [VendorField; 13] = [
        VendorField::Name,
        VendorField::Category,
        VendorField::Email,
        VendorField::Phone,
        VendorField::Website,
        VendorField::Street,
        VendorField::City,
        VendorField::State,
        VendorField::PostalCode,
        VendorField::EstimatedCost,
        VendorField::Booked,
        VendorField::BookingDate,
        VendorField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VendorField::Name => "name",
            VendorField::Category => "category",
            VendorField::Email => "email",
            VendorField::Phone => "phone",
            VendorField::Website => "website",
            VendorField::Street => "street",
            VendorField::City => "city",
            VendorField::State => "state",
            VendorField::PostalCode => "postal_code",
            VendorField::EstimatedCost => "estimated_cost",
            VendorField::Booked => "booked",
            VendorField::BookingDate => "booking_date",
            VendorField::Notes => "notes",
        }
    }

    /// Recognized header spellings, pre-normalized (lowercase, alphanumeric
    /// only). The first synonym doubles as the canonical template header.
    pub(crate) fn synonyms(&self) -> &'static [&'static str] {
        match self {
            VendorField::Name => &[
                "name",
                "vendorname",
                "vendor",
                "businessname",
                "business",
                "company",
                "companyname",
            ],
            VendorField::Category => &["category", "type", "vendortype", "vendorcategory"],
            VendorField::Email => &["email", "emailaddress", "contactemail", "mail"],
            VendorField::Phone => &["phone", "phonenumber", "telephone", "contactphone", "tel"],
            VendorField::Website => &["website", "url", "web", "site"],
            VendorField::Street => &[
                "street",
                "address",
                "streetaddress",
                "address1",
                "addressline1",
            ],
            VendorField::City => &["city", "town"],
            VendorField::State => &["state", "province", "region"],
            VendorField::PostalCode => &["postalcode", "zip", "zipcode", "postcode"],
            VendorField::EstimatedCost => &[
                "estimatedcost",
                "cost",
                "price",
                "amount",
                "budget",
                "estimate",
            ],
            VendorField::Booked => &["booked", "isbooked", "confirmed", "hired"],
            VendorField::BookingDate => &[
                "bookingdate",
                "datebooked",
                "bookeddate",
                "bookedon",
                "date",
            ],
            VendorField::Notes => &["notes", "note", "comments", "remarks", "description"],
        }
    }
}

impl fmt::Display for VendorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Best-effort mapping from vendor fields to source column indices.
/// Unmapped headers are simply absent.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    by_field: HashMap<VendorField, usize>,
}

impl ColumnMapping {
    /// Claims a column for a field. The first header claiming a field wins;
    /// later duplicates are ignored.
    pub(crate) fn claim(&mut self, field: VendorField, column: usize) {
        self.by_field.entry(field).or_insert(column);
    }

    pub fn column_for(&self, field: VendorField) -> Option<usize> {
        self.by_field.get(&field).copied()
    }

    pub fn contains(&self, field: VendorField) -> bool {
        self.by_field.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// The trimmed cell a field maps to in a row. An empty cell or a row too
    /// short to contain the column yields `None` (field absent).
    pub fn cell<'a>(&self, row: &'a [String], field: VendorField) -> Option<&'a str> {
        self.column_for(field)
            .and_then(|idx| row.get(idx))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Mapped (field, column) pairs in field declaration order, for display.
    pub fn entries(&self) -> Vec<(VendorField, usize)> {
        VendorField::ALL
            .iter()
            .filter_map(|f| self.by_field.get(f).map(|idx| (*f, *idx)))
            .collect()
    }
}

/// One row-level validation failure. `row` is the 1-based row of the original
/// file, where row 1 is the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

/// Outcome of validating all rows. The import proceeds only when no row
/// carries an error.
#[derive(Debug, Clone, Default)]
pub struct ImportValidationResult {
    pub errors: Vec<RowError>,
}

impl ImportValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Which snapshot index a duplicate key was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    Name,
    Email,
}

impl fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateKind::Name => write!(f, "name"),
            DuplicateKind::Email => write!(f, "email"),
        }
    }
}

/// Two existing vendors collapsed onto the same lookup key; only the last one
/// is reachable for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub kind: DuplicateKind,
    pub key: String,
}

/// Output of the reconciliation planner. The three sets are disjoint.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationPlan {
    /// Candidates with no match in the snapshot.
    pub to_add: Vec<VendorCandidate>,
    /// Sync mode: matched existing ids, preserved without field overwrite.
    pub to_update: Vec<VendorId>,
    /// Sync mode: existing ids absent from the file.
    pub to_delete: Vec<VendorId>,
    /// Add-only mode: candidates that matched an existing vendor.
    pub skipped: usize,
    /// Snapshot keys that collided while building the lookup indices.
    pub duplicate_keys: Vec<DuplicateKey>,
}

/// Final counters reported to the caller after a plan executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub added: usize,
    pub updated: usize,
    pub deleted: usize,
    pub skipped: usize,
}
