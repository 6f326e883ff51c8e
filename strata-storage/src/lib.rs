//! # strata-storage
//!
//! SQLite persistence layer for the Strata compaction catalog.
//! Owns the connection pool, the versioned schema migrations, and the
//! query layer over `skipped_compactions`.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::CatalogEngine;

use strata_core::errors::{CatalogError, StrataError};

/// Wrap an opaque storage failure message into the umbrella error.
pub(crate) fn to_storage_err(message: String) -> StrataError {
    StrataError::Catalog(CatalogError::Sqlite { message })
}

/// Classify a rusqlite error into the catalog taxonomy. Read-only and
/// authorization failures are privilege errors; busy, locked, and
/// cannot-open conditions are transient connectivity errors the caller
/// may retry.
pub(crate) fn to_catalog_err(e: rusqlite::Error) -> StrataError {
    use rusqlite::ErrorCode;

    let err = match &e {
        rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
            ErrorCode::ReadOnly
            | ErrorCode::PermissionDenied
            | ErrorCode::AuthorizationForStatementDenied => CatalogError::Privilege {
                reason: e.to_string(),
            },
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked | ErrorCode::CannotOpen => {
                CatalogError::Connectivity {
                    reason: e.to_string(),
                }
            }
            _ => CatalogError::Sqlite {
                message: e.to_string(),
            },
        },
        _ => CatalogError::Sqlite {
            message: e.to_string(),
        },
    };
    StrataError::Catalog(err)
}
