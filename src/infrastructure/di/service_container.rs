// src/infrastructure/di/service_container.rs
use crate::application::error::ApplicationResult;
use crate::application::services::import_service::ImportService;
use crate::application::services::import_service_impl::ImportServiceImpl;
use crate::config::Settings;
use crate::infrastructure::parsers::FileImportSource;
use crate::infrastructure::repositories::json_vendor_repository::JsonVendorRepository;
use std::sync::Arc;

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub vendor_repository: Arc<JsonVendorRepository>,
    pub import_service: Arc<dyn ImportService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    pub fn new(settings: &Settings) -> ApplicationResult<Self> {
        let vendor_repository = Arc::new(JsonVendorRepository::open(&settings.store_path)?);
        let import_service = Arc::new(ImportServiceImpl::new(
            vendor_repository.clone(),
            Arc::new(FileImportSource::new()),
        ));

        Ok(Self {
            vendor_repository,
            import_service,
        })
    }
}
