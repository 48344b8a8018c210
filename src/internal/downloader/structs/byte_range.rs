//! 单个分片的字节区间。

use std::fmt;

/// 一个分片负责的连续字节区间。
///
/// `index` 决定合并顺序；区间为 `[start, start + len)`。
/// 切分时若文件大小小于分片数，会出现 `len == 0` 的空区间，此时没有闭区间终点。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// 分片序号（从 0 开始）
    pub index: usize,
    /// 起始偏移（字节）
    pub start: u64,
    /// 区间长度（字节）
    pub len: u64,
}

impl ByteRange {
    pub fn new(index: usize, start: u64, len: u64) -> Self {
        Self { index, start, len }
    }

    /// 闭区间终点；空区间返回 `None`。
    pub fn end_inclusive(&self) -> Option<u64> {
        (self.len > 0).then(|| self.start + self.len - 1)
    }

    /// 不含上界的终点。
    pub fn end_exclusive(&self) -> u64 {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 生成 Range 请求头：`bytes=start-end`；空区间不发请求，返回 `None`。
    pub fn header_value(&self) -> Option<String> {
        self.end_inclusive()
            .map(|end| format!("bytes={}-{}", self.start, end))
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_inclusive() {
            Some(end) => write!(f, "#{} [{}, {}]", self.index, self.start, end),
            None => write!(f, "#{} [{}, empty]", self.index, self.start),
        }
    }
}
