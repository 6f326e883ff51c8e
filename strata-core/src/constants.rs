/// Strata system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Latest schema version the migration runner brings a catalog to.
pub const SCHEMA_VERSION: u32 = 2;

/// Default number of read connections in the pool.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Default busy timeout applied to every connection (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Default page count per incremental vacuum pass.
pub const DEFAULT_INCREMENTAL_VACUUM_PAGES: u32 = 1_000;
