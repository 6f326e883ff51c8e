/// Storage-layer errors for SQLite catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("insufficient privilege for schema change: {reason}")]
    Privilege { reason: String },

    #[error("existence guard unsupported for table {table}: {reason}")]
    UnsupportedGuard { table: String, reason: String },

    #[error("catalog unavailable: {reason}")]
    Connectivity { reason: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}

impl CatalogError {
    /// Whether the caller may reasonably retry the failed operation.
    /// Privilege and guard errors are permanent; busy/locked stores are not.
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::Connectivity { .. })
    }
}
