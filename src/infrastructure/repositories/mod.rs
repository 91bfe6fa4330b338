pub mod in_memory_vendor_repository;
pub mod json_vendor_repository;
