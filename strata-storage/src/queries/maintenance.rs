//! VACUUM, checkpoint, integrity check.

use rusqlite::Connection;

use strata_core::errors::StrataResult;

use crate::to_catalog_err;

/// Run incremental vacuum.
pub fn incremental_vacuum(conn: &Connection, pages: u32) -> StrataResult<()> {
    conn.execute_batch(&format!("PRAGMA incremental_vacuum({pages})"))
        .map_err(to_catalog_err)?;
    Ok(())
}

/// WAL checkpoint.
pub fn wal_checkpoint(conn: &Connection) -> StrataResult<()> {
    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE)")
        .map_err(to_catalog_err)?;
    Ok(())
}

/// Run integrity check. Returns true if the database is OK.
pub fn integrity_check(conn: &Connection) -> StrataResult<bool> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(to_catalog_err)?;
    Ok(result == "ok")
}
