// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid vendor: {0}")]
    InvalidVendor(String),

    #[error("Invalid tenant: {0}")]
    InvalidTenant(String),

    #[error("Cannot parse import file: {0}")]
    Parse(String),

    #[error("Unsupported import format: {0}")]
    UnsupportedFormat(String),

    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Prefix the error message with additional context.
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::InvalidVendor(msg) => {
                DomainError::InvalidVendor(format!("{}: {}", context.into(), msg))
            }
            DomainError::Parse(msg) => DomainError::Parse(format!("{}: {}", context.into(), msg)),
            DomainError::RepositoryError(msg) => {
                DomainError::RepositoryError(format!("{}: {}", context.into(), msg))
            }
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            err => DomainError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}
