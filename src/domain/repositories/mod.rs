pub mod import_repository;
pub mod vendor_repository;
