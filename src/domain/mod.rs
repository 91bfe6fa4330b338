pub mod column_mapper;
pub mod converter;
pub mod error;
pub mod import;
pub mod reconcile;
pub mod repositories;
pub mod validator;
pub mod vendor;
