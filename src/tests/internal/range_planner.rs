//! 区间切分测试。
//!
//! 测试项：
//! - 整除时各区间等长、首尾相接
//! - 余数全部归最后一个区间
//! - 各种大小与分片数组合下的覆盖性（不重不漏）
//! - 文件比分片数小时的空区间
//! - 空文件、分片数为 0
//! - Range 请求头格式

use crate::downloader::{plan_ranges, ByteRange};

/// 断言区间按序号排列、首尾相接，且总长度等于文件大小。
fn assert_covers(ranges: &[ByteRange], total: u64) {
    let mut covered = 0u64;
    for (i, r) in ranges.iter().enumerate() {
        assert_eq!(r.index, i, "序号应从 0 连续递增");
        if !r.is_empty() {
            assert_eq!(r.start, covered, "区间 {} 应紧接上一个非空区间", r);
        }
        covered += r.len;
    }
    assert_eq!(covered, total, "区间总长度应等于文件大小");
}

// ═══════════════════════════════════════════════════════════════════════════
// 基本切分
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn even_split() {
    let ranges = plan_ranges(100, 4);
    let bounds: Vec<(u64, Option<u64>)> = ranges
        .iter()
        .map(|r| (r.start, r.end_inclusive()))
        .collect();
    assert_eq!(
        bounds,
        vec![
            (0, Some(24)),
            (25, Some(49)),
            (50, Some(74)),
            (75, Some(99)),
        ]
    );
}

#[test]
fn remainder_goes_to_last_range() {
    let ranges = plan_ranges(100, 3);
    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[0], ByteRange::new(0, 0, 33));
    assert_eq!(ranges[1], ByteRange::new(1, 33, 33));
    assert_eq!(ranges[2], ByteRange::new(2, 66, 34));
    assert_eq!(ranges[2].end_inclusive(), Some(99));
}

#[test]
fn single_worker_takes_whole_file() {
    let ranges = plan_ranges(12345, 1);
    assert_eq!(ranges, vec![ByteRange::new(0, 0, 12345)]);
}

#[test]
fn coverage_holds_for_many_combinations() {
    for total in [1u64, 2, 7, 10, 99, 100, 101, 1000, 4096, 1_000_003] {
        for workers in [1usize, 2, 3, 4, 7, 10, 16, 64] {
            let ranges = plan_ranges(total, workers);
            assert_eq!(ranges.len(), workers, "total={} workers={}", total, workers);
            assert_covers(&ranges, total);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 边界情况
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn smaller_than_workers_yields_empty_ranges() {
    let ranges = plan_ranges(5, 10);
    assert_eq!(ranges.len(), 10);
    for r in &ranges[..9] {
        assert!(r.is_empty(), "{} 应为空区间", r);
        assert_eq!(r.start, 0);
        assert_eq!(r.header_value(), None, "空区间不生成请求头");
    }
    assert_eq!(ranges[9], ByteRange::new(9, 0, 5));
    assert_eq!(ranges[9].header_value().as_deref(), Some("bytes=0-4"));
    assert_covers(&ranges, 5);
}

#[test]
fn empty_file_yields_only_empty_ranges() {
    let ranges = plan_ranges(0, 4);
    assert_eq!(ranges.len(), 4);
    assert!(ranges.iter().all(|r| r.is_empty()));
}

#[test]
fn zero_workers_yields_nothing() {
    assert!(plan_ranges(100, 0).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// ByteRange
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn header_value_is_inclusive() {
    let r = ByteRange::new(3, 75, 25);
    assert_eq!(r.header_value().as_deref(), Some("bytes=75-99"));
    assert_eq!(r.end_exclusive(), 100);
}

#[test]
fn display_shows_index_and_bounds() {
    assert_eq!(ByteRange::new(1, 25, 25).to_string(), "#1 [25, 49]");
    assert_eq!(ByteRange::new(0, 0, 0).to_string(), "#0 [0, empty]");
}
