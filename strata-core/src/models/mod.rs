//! Data models for catalog rows.

pub mod skipped_compaction;

pub use skipped_compaction::{PartitionId, SkipRequest, SkippedCompaction};
