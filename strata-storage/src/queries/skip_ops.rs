//! Record, fetch, list, delete for `skipped_compactions` rows.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use strata_core::errors::StrataResult;
use strata_core::models::{PartitionId, SkipRequest, SkippedCompaction};

use crate::{to_catalog_err, to_storage_err};

const SELECT_COLUMNS: &str = "partition_id, reason, skipped_at, \
     num_files, limit_num_files, estimated_bytes, limit_bytes";

/// Record a skip. An existing record for the same partition is replaced,
/// including its metrics and timestamp.
pub fn record_skip(conn: &Connection, request: &SkipRequest) -> StrataResult<()> {
    conn.execute(
        "INSERT INTO skipped_compactions (
            partition_id, reason, skipped_at,
            num_files, limit_num_files, estimated_bytes, limit_bytes
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        ON CONFLICT(partition_id) DO UPDATE SET
            reason          = excluded.reason,
            skipped_at      = excluded.skipped_at,
            num_files       = excluded.num_files,
            limit_num_files = excluded.limit_num_files,
            estimated_bytes = excluded.estimated_bytes,
            limit_bytes     = excluded.limit_bytes",
        params![
            request.partition_id.get(),
            request.reason,
            Utc::now().to_rfc3339(),
            request.num_files,
            request.limit_num_files,
            request.estimated_bytes,
            request.limit_bytes,
        ],
    )
    .map_err(to_catalog_err)?;
    Ok(())
}

/// Fetch the skip record for a partition, if any.
pub fn get_skip(
    conn: &Connection,
    partition_id: PartitionId,
) -> StrataResult<Option<SkippedCompaction>> {
    conn.query_row(
        &format!("SELECT {SELECT_COLUMNS} FROM skipped_compactions WHERE partition_id = ?1"),
        [partition_id.get()],
        row_to_skip,
    )
    .optional()
    .map_err(to_catalog_err)
}

/// All skip records, most recent first.
pub fn list_skips(conn: &Connection) -> StrataResult<Vec<SkippedCompaction>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM skipped_compactions \
             ORDER BY skipped_at DESC, partition_id"
        ))
        .map_err(to_catalog_err)?;
    let skips: Vec<SkippedCompaction> = stmt
        .query_map([], row_to_skip)
        .map_err(to_catalog_err)?
        .collect::<Result<_, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(skips)
}

/// Delete the skip record for a partition. Returns true if one existed.
pub fn delete_skip(conn: &Connection, partition_id: PartitionId) -> StrataResult<bool> {
    let deleted = conn
        .execute(
            "DELETE FROM skipped_compactions WHERE partition_id = ?1",
            [partition_id.get()],
        )
        .map_err(to_catalog_err)?;
    Ok(deleted > 0)
}

fn row_to_skip(row: &Row<'_>) -> rusqlite::Result<SkippedCompaction> {
    let skipped_at: String = row.get(2)?;
    let skipped_at = DateTime::parse_from_rfc3339(&skipped_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(SkippedCompaction {
        partition_id: PartitionId::new(row.get(0)?),
        reason: row.get(1)?,
        skipped_at,
        num_files: row.get(3)?,
        limit_num_files: row.get(4)?,
        estimated_bytes: row.get(5)?,
        limit_bytes: row.get(6)?,
    })
}
