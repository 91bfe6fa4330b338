// src/domain/converter.rs
//! Deterministic row → candidate transform. One candidate per row, never
//! drops or merges; duplicate handling belongs to the reconciliation planner.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::import::{ColumnMapping, VendorField};
use crate::domain::validator::FIRST_DATA_ROW;
use crate::domain::vendor::{
    parse_currency, parse_date, parse_flag, TenantId, VendorCandidate, VendorCandidateBuilder,
};

/// Converts validated rows into candidates, injecting the tenant id.
///
/// Callers are expected to validate first; a cell that still fails to parse
/// here surfaces as an error naming the file row.
pub fn convert_rows(
    rows: &[Vec<String>],
    mapping: &ColumnMapping,
    tenant: &TenantId,
) -> DomainResult<Vec<VendorCandidate>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            convert_row(row, mapping, tenant)
                .map_err(|e| e.context(format!("row {}", idx + FIRST_DATA_ROW)))
        })
        .collect()
}

fn convert_row(
    row: &[String],
    mapping: &ColumnMapping,
    tenant: &TenantId,
) -> DomainResult<VendorCandidate> {
    let name = mapping
        .cell(row, VendorField::Name)
        .ok_or_else(|| DomainError::InvalidVendor("missing required field 'name'".to_string()))?;

    let mut builder = VendorCandidateBuilder::default();
    builder.name(name).tenant_id(tenant.clone());

    if let Some(value) = mapping.cell(row, VendorField::Category) {
        builder.category(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::Email) {
        builder.email(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::Phone) {
        builder.phone(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::Website) {
        builder.website(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::Street) {
        builder.street(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::City) {
        builder.city(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::State) {
        builder.state(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::PostalCode) {
        builder.postal_code(value);
    }
    if let Some(value) = mapping.cell(row, VendorField::EstimatedCost) {
        builder.estimated_cost(parse_currency(value)?);
    }
    if let Some(value) = mapping.cell(row, VendorField::Booked) {
        builder.booked(parse_flag(value)?);
    }
    if let Some(value) = mapping.cell(row, VendorField::BookingDate) {
        builder.booking_date(parse_date(value)?);
    }
    if let Some(value) = mapping.cell(row, VendorField::Notes) {
        builder.notes(value);
    }

    builder.build().map_err(DomainError::from)
}
