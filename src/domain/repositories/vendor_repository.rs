// src/domain/repositories/vendor_repository.rs
use crate::domain::error::DomainResult;
use crate::domain::vendor::{ExistingVendor, TenantId, VendorCandidate, VendorId};

/// Repository trait for vendor persistence.
///
/// Speaks in domain terms and hides the storage mechanism, so the import
/// pipeline can run against the JSON store, an in-memory double, or any
/// future remote backend. Retry and timeout policy belong to implementors,
/// never to callers.
pub trait VendorRepository: std::fmt::Debug + Send + Sync {
    /// Snapshot of every vendor in a tenant's collection. Read once at the
    /// start of a reconciliation and not refreshed mid-operation.
    fn list_by_tenant(&self, tenant: &TenantId) -> DomainResult<Vec<ExistingVendor>>;

    /// Persist a batch of candidates. All-or-nothing: either every candidate
    /// is created and the created records are returned, or the call fails
    /// and nothing is persisted.
    fn create_batch(&self, candidates: &[VendorCandidate]) -> DomainResult<Vec<ExistingVendor>>;

    /// Delete one vendor by id. Returns false when the id is unknown.
    fn delete(&self, id: VendorId) -> DomainResult<bool>;
}
