//! The `skipped_compactions` row model.
//!
//! A row records that some external process decided not to compact a
//! partition, together with the reason and (optionally) the measurements
//! that drove the decision. The catalog never computes these values; it
//! only stores what the producer reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a partition in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionId(i64);

impl PartitionId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PartitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the `skipped_compactions` table.
///
/// The four metrics columns were added after the table first shipped, so
/// rows written by older producers read back as `None` in all four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCompaction {
    pub partition_id: PartitionId,
    /// Human-readable reason the compaction was skipped.
    pub reason: String,
    /// When the skip was recorded.
    pub skipped_at: DateTime<Utc>,
    /// Number of files in the candidate compaction, if reported.
    pub num_files: Option<i64>,
    /// Configured file-count threshold that triggered the skip, if reported.
    pub limit_num_files: Option<i64>,
    /// Estimated size of the candidate compaction in bytes, if reported.
    pub estimated_bytes: Option<i64>,
    /// Configured byte-size threshold that triggered the skip, if reported.
    pub limit_bytes: Option<i64>,
}

/// What a producer submits when recording a skip. `skipped_at` is assigned
/// by the catalog at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRequest {
    pub partition_id: PartitionId,
    pub reason: String,
    pub num_files: Option<i64>,
    pub limit_num_files: Option<i64>,
    pub estimated_bytes: Option<i64>,
    pub limit_bytes: Option<i64>,
}

impl SkipRequest {
    /// A skip with a reason but no reported measurements.
    pub fn bare(partition_id: PartitionId, reason: impl Into<String>) -> Self {
        Self {
            partition_id,
            reason: reason.into(),
            num_files: None,
            limit_num_files: None,
            estimated_bytes: None,
            limit_bytes: None,
        }
    }
}
