//! CatalogEngine — owns the ConnectionPool, runs migrations on open,
//! implements ISkipCatalog.

use std::path::Path;

use strata_core::config::CatalogConfig;
use strata_core::errors::StrataResult;
use strata_core::models::{PartitionId, SkipRequest, SkippedCompaction};
use strata_core::traits::ISkipCatalog;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries;

/// The catalog engine. Owns the connection pool and provides the full
/// ISkipCatalog interface over a schema kept current by the migration
/// runner.
pub struct CatalogEngine {
    pool: ConnectionPool,
    config: CatalogConfig,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl CatalogEngine {
    /// Open a catalog backed by a file on disk, with default configuration.
    pub fn open(path: &Path) -> StrataResult<Self> {
        Self::open_with_config(path, CatalogConfig::default())
    }

    /// Open a catalog backed by a file on disk.
    pub fn open_with_config(path: &Path, config: CatalogConfig) -> StrataResult<Self> {
        let pool = ConnectionPool::open(path, &config)?;
        let engine = Self {
            pool,
            config,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory catalog (for testing). Routes all reads through
    /// the writer since in-memory read pool connections are isolated
    /// databases that can't see the writer's changes.
    pub fn open_in_memory() -> StrataResult<Self> {
        let config = CatalogConfig::default();
        let pool = ConnectionPool::open_in_memory(&config)?;
        let engine = Self {
            pool,
            config,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Bring the schema to the latest version.
    fn initialize(&self) -> StrataResult<()> {
        self.pool
            .writer
            .with_conn_sync(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Run integrity check on the write connection.
    pub fn integrity_check(&self) -> StrataResult<bool> {
        self.pool
            .writer
            .with_conn_sync(queries::maintenance::integrity_check)
    }

    /// Reclaim free pages and truncate the WAL.
    pub fn vacuum(&self) -> StrataResult<()> {
        let pages = self.config.incremental_vacuum_pages;
        self.pool.writer.with_conn_sync(|conn| {
            queries::maintenance::incremental_vacuum(conn, pages)?;
            queries::maintenance::wal_checkpoint(conn)
        })
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer (read pool is isolated).
    fn with_reader<F, T>(&self, f: F) -> StrataResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> StrataResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl ISkipCatalog for CatalogEngine {
    fn record_skip(&self, request: &SkipRequest) -> StrataResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| queries::skip_ops::record_skip(conn, request))
    }

    fn get_skip(&self, partition_id: PartitionId) -> StrataResult<Option<SkippedCompaction>> {
        self.with_reader(|conn| queries::skip_ops::get_skip(conn, partition_id))
    }

    fn list_skips(&self) -> StrataResult<Vec<SkippedCompaction>> {
        self.with_reader(queries::skip_ops::list_skips)
    }

    fn delete_skip(&self, partition_id: PartitionId) -> StrataResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| queries::skip_ops::delete_skip(conn, partition_id))
    }
}
