//! v002: skip measurement columns on `skipped_compactions`.
//!
//! Adds `num_files`, `limit_num_files`, `estimated_bytes`, and
//! `limit_bytes` — all nullable 64-bit integers defaulting to NULL — so a
//! producer can record by how much the relevant thresholds were exceeded.
//! Each column is independently guarded, and the whole step is a no-op
//! when the table itself is absent (it is neither created nor touched).
//! Rows written before this step read back NULL in all four columns.

use rusqlite::Connection;

use strata_core::errors::StrataResult;

use super::guard;

const TABLE: &str = "skipped_compactions";

const COLUMNS: &[&str] = &[
    "num_files",
    "limit_num_files",
    "estimated_bytes",
    "limit_bytes",
];

pub fn migrate(conn: &Connection) -> StrataResult<()> {
    if !guard::table_exists(conn, TABLE)? {
        tracing::debug!(table = TABLE, "table absent, nothing to migrate");
        return Ok(());
    }

    for column in COLUMNS {
        guard::add_column_if_missing(conn, TABLE, column, "BIGINT DEFAULT NULL")?;
    }
    Ok(())
}
