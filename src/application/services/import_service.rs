// src/application/services/import_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::import::{
    ColumnMapping, ImportMode, ImportPreview, ImportStats, ImportValidationResult,
    ReconciliationPlan,
};
use crate::domain::vendor::{ExistingVendor, TenantId};
use std::path::Path;

/// Application service for the vendor import pipeline:
/// parse → map → validate → convert → plan → execute.
pub trait ImportService: Send + Sync {
    /// Parse the file without touching the store.
    fn preview_file(&self, path: &Path) -> ApplicationResult<ImportPreview>;

    /// Parse, map headers and validate every row. No persistence.
    fn validate_file(
        &self,
        path: &Path,
    ) -> ApplicationResult<(ColumnMapping, ImportValidationResult)>;

    /// Run the pipeline up to the plan, without executing it (dry run).
    fn plan_import(
        &self,
        path: &Path,
        mode: ImportMode,
        tenant: &TenantId,
    ) -> ApplicationResult<ReconciliationPlan>;

    /// Full pipeline. Validation is all-or-nothing: any row error aborts the
    /// import before the first repository call.
    fn run_import(
        &self,
        path: &Path,
        mode: ImportMode,
        tenant: &TenantId,
    ) -> ApplicationResult<ImportStats>;

    /// Current store contents for a tenant.
    fn list_vendors(&self, tenant: &TenantId) -> ApplicationResult<Vec<ExistingVendor>>;
}
