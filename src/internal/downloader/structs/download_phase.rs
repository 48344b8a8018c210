/// 下载阶段（由协调器内部推进，外部通过 `RangeDownloader::phase()` 只读监听）
///
/// `Idle -> Probing -> Planning -> Fetching -> Merging -> Done | Failed`；
/// 单个分片失败不会让任务进入 `Failed`，只有探测或合并出错才会。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadPhase {
    #[default]
    Idle,
    Probing,
    Planning,
    Fetching,
    Merging,
    Done,
    Failed,
}

impl DownloadPhase {
    /// 是否已到达终态。
    pub fn is_terminal(&self) -> bool {
        matches!(self, DownloadPhase::Done | DownloadPhase::Failed)
    }
}
