//! Tests for record deduplication

use super::*;
use crate::app::services::record_cleaner::deduplication::deduplicate_records;
use crate::app::services::record_cleaner::quality_filter::RejectReason;
use crate::app::services::record_cleaner::stats::CleaningStats;

#[test]
fn test_deduplicate_records_no_duplicates() {
    let mut stats = CleaningStats::new();
    let records = vec![
        create_candidate("Chess", "GAME"),
        create_candidate("Chess", "BOARD"),
        create_candidate("Maps", "TRAVEL"),
    ];

    let result = deduplicate_records(records, &mut stats);

    assert_eq!(result.len(), 3);
    assert_eq!(stats.rejected(RejectReason::Duplicate), 0);
}

#[test]
fn test_deduplicate_records_keeps_first_occurrence() {
    let mut stats = CleaningStats::new();
    let mut first = create_candidate("Photo Editor", "PHOTOGRAPHY");
    first.installs = 1_000;
    let mut second = create_candidate("photo editor", "Photography");
    second.installs = 2_000;
    let other = create_candidate("Camera", "PHOTOGRAPHY");

    let result = deduplicate_records(vec![first, other, second], &mut stats);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].name, "Photo Editor");
    assert_eq!(result[0].installs, 1_000);
    assert_eq!(result[1].name, "Camera");
    assert_eq!(stats.rejected(RejectReason::Duplicate), 1);
}

#[test]
fn test_deduplicate_records_empty_input() {
    let mut stats = CleaningStats::new();
    let result = deduplicate_records(Vec::new(), &mut stats);
    assert!(result.is_empty());
    assert!(stats.rejections.is_empty());
}
