//! Integration test: ISkipCatalog over the engine — record, fetch, list,
//! delete, upsert.

use strata_core::models::{PartitionId, SkipRequest};
use strata_core::traits::ISkipCatalog;
use strata_storage::CatalogEngine;

fn request_with_metrics(partition_id: i64) -> SkipRequest {
    SkipRequest {
        partition_id: PartitionId::new(partition_id),
        reason: "over file limit".to_string(),
        num_files: Some(12_000),
        limit_num_files: Some(10_000),
        estimated_bytes: Some(48 * 1024 * 1024 * 1024),
        limit_bytes: Some(32 * 1024 * 1024 * 1024),
    }
}

#[test]
fn record_and_fetch_with_metrics() {
    let engine = CatalogEngine::open_in_memory().unwrap();
    let request = request_with_metrics(7);
    engine.record_skip(&request).unwrap();

    let skip = engine.get_skip(PartitionId::new(7)).unwrap().unwrap();
    assert_eq!(skip.partition_id, PartitionId::new(7));
    assert_eq!(skip.reason, "over file limit");
    assert_eq!(skip.num_files, Some(12_000));
    assert_eq!(skip.limit_num_files, Some(10_000));
    assert_eq!(skip.estimated_bytes, Some(48 * 1024 * 1024 * 1024));
    assert_eq!(skip.limit_bytes, Some(32 * 1024 * 1024 * 1024));
}

#[test]
fn record_without_metrics_reads_back_none() {
    let engine = CatalogEngine::open_in_memory().unwrap();
    engine
        .record_skip(&SkipRequest::bare(PartitionId::new(3), "manual skip"))
        .unwrap();

    let skip = engine.get_skip(PartitionId::new(3)).unwrap().unwrap();
    assert_eq!(skip.num_files, None);
    assert_eq!(skip.limit_num_files, None);
    assert_eq!(skip.estimated_bytes, None);
    assert_eq!(skip.limit_bytes, None);
}

#[test]
fn get_missing_partition_is_none() {
    let engine = CatalogEngine::open_in_memory().unwrap();
    assert!(engine.get_skip(PartitionId::new(404)).unwrap().is_none());
}

#[test]
fn rerecord_replaces_previous_skip() {
    let engine = CatalogEngine::open_in_memory().unwrap();
    engine
        .record_skip(&SkipRequest::bare(PartitionId::new(5), "first attempt"))
        .unwrap();
    engine.record_skip(&request_with_metrics(5)).unwrap();

    let skips = engine.list_skips().unwrap();
    assert_eq!(skips.len(), 1, "upsert must not duplicate the partition");
    assert_eq!(skips[0].reason, "over file limit");
    assert_eq!(skips[0].num_files, Some(12_000));
}

#[test]
fn list_is_most_recent_first() {
    let engine = CatalogEngine::open_in_memory().unwrap();
    for id in 1..=3 {
        engine
            .record_skip(&SkipRequest::bare(PartitionId::new(id), "skip"))
            .unwrap();
        // keep the skipped_at timestamps distinct so ordering is stable
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    let skips = engine.list_skips().unwrap();
    assert_eq!(skips.len(), 3);
    assert_eq!(skips[0].partition_id, PartitionId::new(3));
    assert_eq!(skips[2].partition_id, PartitionId::new(1));
}

#[test]
fn delete_reports_whether_a_record_existed() {
    let engine = CatalogEngine::open_in_memory().unwrap();
    engine
        .record_skip(&SkipRequest::bare(PartitionId::new(9), "skip"))
        .unwrap();

    assert!(engine.delete_skip(PartitionId::new(9)).unwrap());
    assert!(!engine.delete_skip(PartitionId::new(9)).unwrap());
    assert!(engine.get_skip(PartitionId::new(9)).unwrap().is_none());
}

#[test]
fn integrity_and_vacuum_succeed() {
    let engine = CatalogEngine::open_in_memory().unwrap();
    engine
        .record_skip(&SkipRequest::bare(PartitionId::new(1), "skip"))
        .unwrap();

    assert!(engine.integrity_check().unwrap());
    engine.vacuum().unwrap();
}
