//! Error types for the Strata workspace.

pub mod catalog_error;

pub use catalog_error::CatalogError;

/// Result alias used across the workspace.
pub type StrataResult<T> = Result<T, StrataError>;

/// Umbrella error for all Strata subsystems.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
