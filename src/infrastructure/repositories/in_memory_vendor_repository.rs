// src/infrastructure/repositories/in_memory_vendor_repository.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::vendor_repository::VendorRepository;
use crate::domain::vendor::{ExistingVendor, TenantId, VendorCandidate, VendorId};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    vendors: Vec<ExistingVendor>,
    fail_create: bool,
    fail_delete_ids: HashSet<VendorId>,
}

/// In-memory vendor store with call counting and fault injection.
///
/// Used by the test suite to verify repository-call contracts (all-or-nothing
/// validation, delete failure aggregation) without touching disk.
#[derive(Debug, Default)]
pub struct InMemoryVendorRepository {
    state: Mutex<State>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryVendorRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Seeds the store with pre-existing vendors under fixed ids.
    pub fn seed(&self, vendors: Vec<ExistingVendor>) {
        let mut state = self.state.lock().expect("lock poisoned");
        let max_id = vendors.iter().map(|v| v.id.0).max().unwrap_or(0);
        state.next_id = state.next_id.max(max_id + 1);
        state.vendors.extend(vendors);
    }

    /// Makes every subsequent `create_batch` call fail.
    pub fn fail_creates(&self) {
        self.state.lock().expect("lock poisoned").fail_create = true;
    }

    /// Makes `delete` fail for the given ids.
    pub fn fail_deletes_for(&self, ids: &[VendorId]) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.fail_delete_ids.extend(ids.iter().copied());
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

impl InMemoryVendorRepository {
    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::RepositoryError("store lock poisoned".to_string()))
    }
}

impl VendorRepository for InMemoryVendorRepository {
    fn list_by_tenant(&self, tenant: &TenantId) -> DomainResult<Vec<ExistingVendor>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.lock()?;
        Ok(state
            .vendors
            .iter()
            .filter(|v| &v.tenant_id == tenant)
            .cloned()
            .collect())
    }

    fn create_batch(&self, candidates: &[VendorCandidate]) -> DomainResult<Vec<ExistingVendor>> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock()?;
        if state.fail_create {
            return Err(DomainError::RepositoryError(
                "injected create failure".to_string(),
            ));
        }
        let mut created = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let vendor = ExistingVendor::from_candidate(VendorId(state.next_id), candidate);
            state.next_id += 1;
            state.vendors.push(vendor.clone());
            created.push(vendor);
        }
        Ok(created)
    }

    fn delete(&self, id: VendorId) -> DomainResult<bool> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock()?;
        if state.fail_delete_ids.contains(&id) {
            return Err(DomainError::RepositoryError(format!(
                "injected delete failure for vendor {}",
                id
            )));
        }
        let Some(index) = state.vendors.iter().position(|v| v.id == id) else {
            return Ok(false);
        };
        state.vendors.remove(index);
        Ok(true)
    }
}
