// src/domain/vendor.rs
use crate::domain::error::{DomainError, DomainResult};
use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted vendor record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VendorId(pub i64);

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The organizational scope a vendor belongs to (one wedding/couple).
///
/// Always passed explicitly; there is no ambient "current tenant" state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a TenantId with validation.
    pub fn new<S: AsRef<str>>(value: S) -> DomainResult<Self> {
        let value = value.as_ref().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::InvalidTenant(
                "Tenant id cannot be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed, validated, not-yet-persisted vendor derived from one import row.
///
/// Immutable once built; consumed by the reconciliation planner and discarded
/// after the plan executes. The tenant id is injected at conversion time and
/// never read from the file.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder(setter(into, strip_option))]
pub struct VendorCandidate {
    pub name: String,
    pub tenant_id: TenantId,
    #[builder(default)]
    pub category: Option<String>,
    #[builder(default)]
    pub email: Option<String>,
    #[builder(default)]
    pub phone: Option<String>,
    #[builder(default)]
    pub website: Option<String>,
    #[builder(default)]
    pub street: Option<String>,
    #[builder(default)]
    pub city: Option<String>,
    #[builder(default)]
    pub state: Option<String>,
    #[builder(default)]
    pub postal_code: Option<String>,
    #[builder(default)]
    pub estimated_cost: Option<f64>,
    #[builder(default)]
    pub booked: Option<bool>,
    #[builder(default)]
    pub booking_date: Option<NaiveDate>,
    #[builder(default)]
    pub notes: Option<String>,
}

impl VendorCandidate {
    /// Matching key: trimmed, lowercased name.
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Matching fallback key: trimmed, lowercased email, if any.
    pub fn normalized_email(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_lowercase)
    }
}

impl From<VendorCandidateBuilderError> for DomainError {
    fn from(e: VendorCandidateBuilderError) -> Self {
        DomainError::InvalidVendor(e.to_string())
    }
}

/// A vendor already persisted in the store, fetched once before
/// reconciliation begins. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingVendor {
    pub id: VendorId,
    pub tenant_id: TenantId,
    pub name: String,
    pub category: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub estimated_cost: Option<f64>,
    pub booked: Option<bool>,
    pub booking_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

impl ExistingVendor {
    /// Materializes a candidate into a persisted record under a fresh id.
    pub fn from_candidate(id: VendorId, candidate: &VendorCandidate) -> Self {
        Self {
            id,
            tenant_id: candidate.tenant_id.clone(),
            name: candidate.name.clone(),
            category: candidate.category.clone(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            website: candidate.website.clone(),
            street: candidate.street.clone(),
            city: candidate.city.clone(),
            state: candidate.state.clone(),
            postal_code: candidate.postal_code.clone(),
            estimated_cost: candidate.estimated_cost,
            booked: candidate.booked,
            booking_date: candidate.booking_date,
            notes: candidate.notes.clone(),
            archived: false,
        }
    }

    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn normalized_email(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_lowercase)
    }
}

/// Parse a monetary cell ("$1,200.50") into a numeric amount.
pub fn parse_currency(raw: &str) -> DomainResult<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| DomainError::InvalidVendor(format!("Not a monetary amount: '{}'", raw)))
}

/// Parse a boolean cell. Accepts true/yes/y/1 and false/no/n/0.
pub fn parse_flag(raw: &str) -> DomainResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(DomainError::InvalidVendor(format!(
            "Not a yes/no value: '{}'",
            raw
        ))),
    }
}

/// Accepted date formats, first match wins.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a date cell into a canonical date.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(DomainError::InvalidVendor(format!("Not a date: '{}'", raw)))
}
