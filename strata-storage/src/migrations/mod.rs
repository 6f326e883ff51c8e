//! Versioned schema migrations with an applied-migrations ledger.
//!
//! Steps are ordered by version and recorded in `schema_migrations`; a step
//! runs only if its version is absent from the ledger, and the step body
//! plus its ledger row commit in one transaction. Every step body is also
//! idempotent on its own — ledgers can be bypassed or partially applied,
//! so re-running a recorded step by hand must produce zero schema diff.

pub mod guard;
pub mod v001_skipped_compactions;
pub mod v002_skip_limits;

use rusqlite::Connection;

use strata_core::errors::{CatalogError, StrataError, StrataResult};

use crate::{to_catalog_err, to_storage_err};

/// A single migration step.
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    apply: fn(&Connection) -> StrataResult<()>,
}

/// All migrations, in application order.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "skipped_compactions",
        apply: v001_skipped_compactions::migrate,
    },
    Migration {
        version: 2,
        name: "skip_limits",
        apply: v002_skip_limits::migrate,
    },
];

/// The schema version a fully migrated catalog sits at.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Apply all pending migrations to the given connection.
pub fn run_migrations(conn: &Connection) -> StrataResult<()> {
    ensure_ledger(conn)?;
    let applied = applied_versions(conn)?;

    for migration in MIGRATIONS {
        if applied.contains(&migration.version) {
            continue;
        }
        apply_one(conn, migration)?;
    }
    Ok(())
}

/// Versions recorded in the ledger, ascending.
pub fn applied_versions(conn: &Connection) -> StrataResult<Vec<u32>> {
    ensure_ledger(conn)?;
    let mut stmt = conn
        .prepare("SELECT version FROM schema_migrations ORDER BY version")
        .map_err(to_catalog_err)?;
    let versions: Vec<u32> = stmt
        .query_map([], |row| row.get::<_, u32>(0))
        .map_err(to_catalog_err)?
        .collect::<Result<_, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(versions)
}

fn ensure_ledger(conn: &Connection) -> StrataResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(to_catalog_err)
}

/// Run one step and its ledger row in a single transaction.
fn apply_one(conn: &Connection, migration: &Migration) -> StrataResult<()> {
    tracing::info!(
        version = migration.version,
        name = migration.name,
        "applying migration"
    );

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("migration {} begin: {e}", migration.version)))?;

    let res = (migration.apply)(&tx).and_then(|()| {
        tx.execute(
            "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
            rusqlite::params![migration.version, migration.name],
        )
        .map_err(to_catalog_err)?;
        Ok(())
    });

    match res {
        Ok(()) => tx
            .commit()
            .map_err(|e| to_storage_err(format!("migration {} commit: {e}", migration.version))),
        Err(e) => {
            let _ = tx.rollback();
            // Privilege, guard, and connectivity errors propagate unchanged
            // so the caller can tell fatal from retriable. Everything else
            // is wrapped with the failing version.
            match e {
                StrataError::Catalog(
                    inner @ (CatalogError::Privilege { .. }
                    | CatalogError::UnsupportedGuard { .. }
                    | CatalogError::Connectivity { .. }),
                ) => Err(StrataError::Catalog(inner)),
                other => Err(StrataError::Catalog(CatalogError::MigrationFailed {
                    version: migration.version,
                    reason: other.to_string(),
                })),
            }
        }
    }
}
