//! Existence guards for idempotent DDL.
//!
//! SQLite has no `ALTER TABLE ... ADD COLUMN IF NOT EXISTS`, so each guard
//! is evaluated explicitly before the ALTER. A guard that cannot be
//! evaluated surfaces as an error rather than degrading to an unguarded
//! ALTER, which could fail or duplicate under re-runs.

use rusqlite::Connection;

use strata_core::errors::{CatalogError, StrataError, StrataResult};

use crate::{to_catalog_err, to_storage_err};

/// Whether a table of the given name exists.
pub fn table_exists(conn: &Connection, table: &str) -> StrataResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .map_err(to_catalog_err)?;
    Ok(count > 0)
}

/// Column names of an existing table, in declaration order.
///
/// Errors with `UnsupportedGuard` if the store claims the table exists but
/// `PRAGMA table_info` yields nothing to guard against.
pub fn column_names(conn: &Connection, table: &str) -> StrataResult<Vec<String>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .map_err(to_catalog_err)?;
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(to_catalog_err)?
        .collect::<Result<_, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    if columns.is_empty() {
        return Err(StrataError::Catalog(CatalogError::UnsupportedGuard {
            table: table.to_string(),
            reason: "PRAGMA table_info returned no columns for an existing table".to_string(),
        }));
    }
    Ok(columns)
}

/// Whether a column exists on an existing table.
pub fn column_exists(conn: &Connection, table: &str, column: &str) -> StrataResult<bool> {
    Ok(column_names(conn, table)?.iter().any(|c| c == column))
}

/// Add a column to an existing table if it doesn't already exist.
/// A column already present is left untouched: no type coercion, no
/// default change. Returns true if the column was added.
pub fn add_column_if_missing(
    conn: &Connection,
    table: &str,
    column: &str,
    definition: &str,
) -> StrataResult<bool> {
    if column_exists(conn, table, column)? {
        return Ok(false);
    }
    conn.execute_batch(&format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"))
        .map_err(to_catalog_err)?;
    tracing::debug!(table, column, "added column");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn_with_table() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)")
            .unwrap();
        conn
    }

    #[test]
    fn table_existence_is_reported() {
        let conn = conn_with_table();
        assert!(table_exists(&conn, "t").unwrap());
        assert!(!table_exists(&conn, "missing").unwrap());
    }

    #[test]
    fn column_names_in_declaration_order() {
        let conn = conn_with_table();
        assert_eq!(column_names(&conn, "t").unwrap(), vec!["id", "name"]);
    }

    #[test]
    fn add_column_is_guarded() {
        let conn = conn_with_table();
        assert!(add_column_if_missing(&conn, "t", "age", "BIGINT DEFAULT NULL").unwrap());
        // Second add is a no-op, not an error.
        assert!(!add_column_if_missing(&conn, "t", "age", "BIGINT DEFAULT NULL").unwrap());
        assert!(column_exists(&conn, "t", "age").unwrap());
    }
}
