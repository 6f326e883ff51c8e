//! The single write connection. All schema changes and row mutations go
//! through here; WAL mode keeps readers unblocked meanwhile.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use strata_core::errors::StrataResult;

use super::pragmas::apply_pragmas;
use crate::{to_catalog_err, to_storage_err};

/// Exclusive writer over the catalog database.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database file.
    pub fn open(path: &Path, busy_timeout_ms: u64) -> StrataResult<Self> {
        let conn = Connection::open(path).map_err(to_catalog_err)?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory(busy_timeout_ms: u64) -> StrataResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_catalog_err)?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with the write connection held exclusively.
    pub fn with_conn_sync<F, T>(&self, f: F) -> StrataResult<T>
    where
        F: FnOnce(&Connection) -> StrataResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
