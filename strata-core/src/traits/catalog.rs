use crate::errors::StrataResult;
use crate::models::{PartitionId, SkipRequest, SkippedCompaction};

/// Catalog surface over the `skipped_compactions` table.
///
/// Producers (compactors, schedulers) call `record_skip` with values they
/// computed themselves; readers use the query side to decide whether a
/// partition is worth revisiting.
pub trait ISkipCatalog: Send + Sync {
    /// Record that a partition's compaction was skipped. Recording a skip
    /// for an already-skipped partition replaces the previous record.
    fn record_skip(&self, request: &SkipRequest) -> StrataResult<()>;

    /// Fetch the skip record for a partition, if any.
    fn get_skip(&self, partition_id: PartitionId) -> StrataResult<Option<SkippedCompaction>>;

    /// All skip records, most recent first.
    fn list_skips(&self) -> StrataResult<Vec<SkippedCompaction>>;

    /// Remove the skip record for a partition. Returns true if one existed.
    fn delete_skip(&self, partition_id: PartitionId) -> StrataResult<bool>;
}
