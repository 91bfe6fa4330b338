// src/application/error.rs
use crate::domain::error::DomainError;
use crate::domain::import::ImportValidationResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("No tenant selected")]
    MissingTenant,

    #[error("Import file failed validation with {} error(s)", .0.errors.len())]
    Validation(ImportValidationResult),

    #[error("{failed} of {attempted} delete(s) failed (first error: {first_error})")]
    DeleteBatch {
        attempted: usize,
        failed: usize,
        first_error: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ApplicationError {
    /// Prefix the error message with additional context.
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            ApplicationError::Domain(err) => ApplicationError::Domain(err.context(context)),
            ApplicationError::Other(msg) => {
                ApplicationError::Other(format!("{}: {}", context.into(), msg))
            }
            err => ApplicationError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        ApplicationError::Domain(DomainError::Io(err))
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
