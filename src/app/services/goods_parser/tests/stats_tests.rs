//! Tests for parse statistics

use crate::app::services::goods_parser::ParseStats;

#[test]
fn test_new_stats_are_empty() {
    let stats = ParseStats::new();
    assert_eq!(stats.total_lines, 0);
    assert_eq!(stats.products_parsed, 0);
    assert_eq!(stats.lines_rejected, 0);
}

#[test]
fn test_success_rate() {
    let stats = ParseStats {
        total_lines: 4,
        products_parsed: 3,
        lines_rejected: 1,
    };
    assert_eq!(stats.success_rate(), 75.0);
}

#[test]
fn test_success_rate_empty_input() {
    let stats = ParseStats::new();
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_complete_failure_detection() {
    let all_failed = ParseStats {
        total_lines: 3,
        products_parsed: 0,
        lines_rejected: 3,
    };
    assert!(all_failed.is_complete_failure());

    let partial = ParseStats {
        total_lines: 3,
        products_parsed: 1,
        lines_rejected: 2,
    };
    assert!(!partial.is_complete_failure());

    // An empty file is not a failure, there was nothing to parse
    assert!(!ParseStats::new().is_complete_failure());
}
