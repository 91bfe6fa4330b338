// src/infrastructure/repositories/json_vendor_repository.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::vendor_repository::VendorRepository;
use crate::domain::vendor::{ExistingVendor, TenantId, VendorCandidate, VendorId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: i64,
    vendors: Vec<ExistingVendor>,
}

/// JSON-file-backed vendor store.
///
/// Writes go through a temp file in the store's directory followed by a
/// rename, so a crash mid-write never leaves a torn store. Mutations update
/// a scratch copy first and commit in-memory state only after the file write
/// succeeded, which keeps `create_batch` all-or-nothing.
#[derive(Debug)]
pub struct JsonVendorRepository {
    path: PathBuf,
    state: Mutex<StoreFile>,
}

impl JsonVendorRepository {
    #[instrument(level = "debug")]
    pub fn open<P: AsRef<Path> + std::fmt::Debug>(path: P) -> DomainResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                DomainError::RepositoryError(format!(
                    "store file '{}' is not valid JSON: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            StoreFile {
                next_id: 1,
                vendors: Vec::new(),
            }
        };
        debug!(
            "opened vendor store '{}' with {} vendor(s)",
            path.display(),
            state.vendors.len()
        );
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    fn persist(&self, state: &StoreFile) -> DomainResult<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| DomainError::RepositoryError(format!("cannot serialize store: {}", e)))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| {
            DomainError::RepositoryError(format!(
                "cannot replace store file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, StoreFile>> {
        self.state
            .lock()
            .map_err(|_| DomainError::RepositoryError("store lock poisoned".to_string()))
    }
}

impl VendorRepository for JsonVendorRepository {
    fn list_by_tenant(&self, tenant: &TenantId) -> DomainResult<Vec<ExistingVendor>> {
        let state = self.lock()?;
        Ok(state
            .vendors
            .iter()
            .filter(|v| &v.tenant_id == tenant)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, candidates), level = "debug", fields(count = candidates.len()))]
    fn create_batch(&self, candidates: &[VendorCandidate]) -> DomainResult<Vec<ExistingVendor>> {
        let mut state = self.lock()?;

        let mut next_id = state.next_id;
        let created: Vec<ExistingVendor> = candidates
            .iter()
            .map(|candidate| {
                let vendor = ExistingVendor::from_candidate(VendorId(next_id), candidate);
                next_id += 1;
                vendor
            })
            .collect();

        let mut scratch = StoreFile {
            next_id,
            vendors: state.vendors.clone(),
        };
        scratch.vendors.extend(created.iter().cloned());

        self.persist(&scratch)?;
        *state = scratch;
        Ok(created)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(&self, id: VendorId) -> DomainResult<bool> {
        let mut state = self.lock()?;

        let Some(index) = state.vendors.iter().position(|v| v.id == id) else {
            return Ok(false);
        };

        let mut scratch = StoreFile {
            next_id: state.next_id,
            vendors: state.vendors.clone(),
        };
        scratch.vendors.remove(index);

        self.persist(&scratch)?;
        *state = scratch;
        Ok(true)
    }
}
