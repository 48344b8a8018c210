//! 区间切分：把 `[0, total_size)` 等分给 `workers` 个分片。

use super::super::byte_range::ByteRange;

/// 固定等分：每段 `total_size / workers` 字节（截断），最后一段吸收余数。
///
/// 不根据吞吐量调整。`total_size < workers` 时前 `workers - 1` 段都是起点为 0 的空区间，
/// 最后一段覆盖整个文件；`workers == 0` 返回空列表。
pub fn plan_ranges(total_size: u64, workers: usize) -> Vec<ByteRange> {
    if workers == 0 {
        return Vec::new();
    }

    let chunk_size = total_size / workers as u64;

    (0..workers)
        .map(|i| {
            let start = i as u64 * chunk_size;
            let len = if i == workers - 1 {
                total_size - start
            } else {
                chunk_size
            };
            ByteRange::new(i, start, len)
        })
        .collect()
}
