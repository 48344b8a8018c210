//! 下载过程事件：由协调器与各分片任务发出，交给钩子消费。

use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::byte_range::ByteRange;

/// 下载流程中的可观测事件，按发生顺序投递给已注册的钩子。
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadEvent {
    /// 开始探测服务器能力
    ProbeStarted { url: String },
    /// 探测成功，得到文件总大小
    SizeDiscovered { total_size: u64 },
    /// 切分完成
    RangesPlanned { ranges: Vec<ByteRange> },
    /// 某分片开始拉取
    ChunkStarted { range: ByteRange },
    /// 某分片拉取完成，`bytes` 为写入分片文件的字节数
    ChunkFinished { index: usize, bytes: u64 },
    /// 某分片拉取失败；不影响其他分片
    ChunkFailed { index: usize, error: String },
    /// 所有分片已结束，开始合并
    MergeStarted { pieces: usize },
    /// 某分片已追加到目标文件
    PieceMerged { index: usize, bytes: u64 },
    /// 下载完成
    Completed { output: PathBuf, total_size: u64 },
    /// 下载失败（探测或合并阶段）
    Failed { error: String },
}

/// 带时间戳的事件。
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent {
    pub at: DateTime<Local>,
    pub event: DownloadEvent,
}

impl TimedEvent {
    pub fn now(event: DownloadEvent) -> Self {
        Self {
            at: Local::now(),
            event,
        }
    }
}
