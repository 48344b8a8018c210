use std::path::PathBuf;

use super::byte_range::ByteRange;

/// 一次成功下载的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// 合并后的目标文件
    pub output: PathBuf,
    /// 探测得到的文件总大小（字节）
    pub total_size: u64,
    /// 实际使用的分片区间，按 index 升序
    pub ranges: Vec<ByteRange>,
}
