pub mod import_service;
pub mod import_service_impl;

pub use import_service::ImportService;
pub use import_service_impl::ImportServiceImpl;
