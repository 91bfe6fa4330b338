// src/application/services/import_service_impl.rs
use std::path::Path;
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::import_service::ImportService;
use crate::domain::column_mapper::map_columns;
use crate::domain::converter::convert_rows;
use crate::domain::import::{
    ColumnMapping, ImportMode, ImportPreview, ImportStats, ImportValidationResult,
    ReconciliationPlan,
};
use crate::domain::reconcile;
use crate::domain::repositories::import_repository::ImportSourceRepository;
use crate::domain::repositories::vendor_repository::VendorRepository;
use crate::domain::validator::validate_rows;
use crate::domain::vendor::{ExistingVendor, TenantId, VendorCandidate};
use tracing::{debug, instrument, warn};

#[derive(Debug)]
pub struct ImportServiceImpl<R: VendorRepository> {
    repository: Arc<R>,
    import_source: Arc<dyn ImportSourceRepository>,
}

impl<R: VendorRepository> ImportServiceImpl<R> {
    pub fn new(repository: Arc<R>, import_source: Arc<dyn ImportSourceRepository>) -> Self {
        Self {
            repository,
            import_source,
        }
    }

    /// Parse, map and validate, then convert. Validation failure means zero
    /// repository calls have happened and none will.
    fn load_candidates(
        &self,
        path: &Path,
        tenant: &TenantId,
    ) -> ApplicationResult<Vec<VendorCandidate>> {
        let preview = self.import_source.parse_preview(path)?;
        let mapping = map_columns(&preview.headers);
        let validation = validate_rows(&preview.rows, &mapping);
        if !validation.is_valid() {
            return Err(ApplicationError::Validation(validation));
        }
        debug!(
            "'{}': {} rows valid, {} columns mapped",
            preview.file_name,
            preview.total_rows,
            mapping.len()
        );
        Ok(convert_rows(&preview.rows, &mapping, tenant)?)
    }

    /// Executes a plan: bulk create first, then per-id deletes.
    ///
    /// A create failure aborts the operation with no stats. Deletes are
    /// best-effort: every id is attempted, failures are aggregated and the
    /// operation fails afterwards if any delete did.
    fn execute(&self, plan: ReconciliationPlan) -> ApplicationResult<ImportStats> {
        let mut stats = ImportStats {
            updated: plan.to_update.len(),
            skipped: plan.skipped,
            ..Default::default()
        };

        if !plan.to_add.is_empty() {
            let created = self.repository.create_batch(&plan.to_add)?;
            stats.added = created.len();
        }

        let attempted = plan.to_delete.len();
        let mut failed = 0usize;
        let mut first_error: Option<String> = None;
        for id in &plan.to_delete {
            match self.repository.delete(*id) {
                // an id that vanished mid-operation is already in the desired
                // end state, count it as deleted
                Ok(_) => stats.deleted += 1,
                Err(e) => {
                    warn!("failed to delete vendor {}: {}", id, e);
                    failed += 1;
                    first_error.get_or_insert_with(|| e.to_string());
                }
            }
        }
        if failed > 0 {
            return Err(ApplicationError::DeleteBatch {
                attempted,
                failed,
                first_error: first_error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(stats)
    }
}

impl<R: VendorRepository> ImportService for ImportServiceImpl<R> {
    #[instrument(skip(self), level = "debug", fields(path = %path.display()))]
    fn preview_file(&self, path: &Path) -> ApplicationResult<ImportPreview> {
        Ok(self.import_source.parse_preview(path)?)
    }

    #[instrument(skip(self), level = "debug", fields(path = %path.display()))]
    fn validate_file(
        &self,
        path: &Path,
    ) -> ApplicationResult<(ColumnMapping, ImportValidationResult)> {
        let preview = self.import_source.parse_preview(path)?;
        let mapping = map_columns(&preview.headers);
        let validation = validate_rows(&preview.rows, &mapping);
        Ok((mapping, validation))
    }

    #[instrument(skip(self), level = "debug", fields(path = %path.display(), mode = %mode, tenant = %tenant))]
    fn plan_import(
        &self,
        path: &Path,
        mode: ImportMode,
        tenant: &TenantId,
    ) -> ApplicationResult<ReconciliationPlan> {
        let candidates = self.load_candidates(path, tenant)?;
        let existing = self.repository.list_by_tenant(tenant)?;
        Ok(reconcile::plan(&candidates, &existing, mode))
    }

    #[instrument(skip(self), level = "debug", fields(path = %path.display(), mode = %mode, tenant = %tenant))]
    fn run_import(
        &self,
        path: &Path,
        mode: ImportMode,
        tenant: &TenantId,
    ) -> ApplicationResult<ImportStats> {
        let candidates = self.load_candidates(path, tenant)?;
        let existing = self.repository.list_by_tenant(tenant)?;
        let plan = reconcile::plan(&candidates, &existing, mode);

        for duplicate in &plan.duplicate_keys {
            warn!(
                "duplicate {} key '{}' among existing vendors; only the last record is reachable for matching",
                duplicate.kind, duplicate.key
            );
        }
        debug!(
            "plan: add {}, update {}, delete {}, skip {}",
            plan.to_add.len(),
            plan.to_update.len(),
            plan.to_delete.len(),
            plan.skipped
        );

        self.execute(plan)
    }

    #[instrument(skip(self), level = "debug", fields(tenant = %tenant))]
    fn list_vendors(&self, tenant: &TenantId) -> ApplicationResult<Vec<ExistingVendor>> {
        Ok(self.repository.list_by_tenant(tenant)?)
    }
}
