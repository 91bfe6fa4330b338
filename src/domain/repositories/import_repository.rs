// src/domain/repositories/import_repository.rs
use crate::domain::error::DomainResult;
use crate::domain::import::ImportPreview;
use std::fmt::Debug;
use std::path::Path;

/// Turns a source file into raw headers and rows.
///
/// Implementations own format detection and cell normalization; mapping and
/// validation happen downstream and never see the file itself.
pub trait ImportSourceRepository: Send + Sync + Debug {
    fn parse_preview(&self, path: &Path) -> DomainResult<ImportPreview>;
}
