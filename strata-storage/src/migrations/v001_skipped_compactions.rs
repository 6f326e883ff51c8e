//! v001: the `skipped_compactions` table.
//!
//! One row per partition whose compaction was skipped; recording a new
//! skip for the same partition replaces the old row, so `partition_id`
//! is unique.

use rusqlite::Connection;

use strata_core::errors::StrataResult;

use super::guard;
use crate::to_catalog_err;

const TABLE: &str = "skipped_compactions";

pub fn migrate(conn: &Connection) -> StrataResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS skipped_compactions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            partition_id INTEGER NOT NULL UNIQUE,
            reason       TEXT NOT NULL,
            skipped_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(to_catalog_err)?;

    // A table migrated by hand may predate skipped_at; the index below
    // needs the column either way. ALTER defaults must be constant, so
    // adopted rows carry the epoch until the next skip is recorded.
    guard::add_column_if_missing(
        conn,
        TABLE,
        "skipped_at",
        "TEXT NOT NULL DEFAULT '1970-01-01T00:00:00.000Z'",
    )?;

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_skipped_at ON skipped_compactions(skipped_at)")
        .map_err(to_catalog_err)?;
    Ok(())
}
