//! 内置钩子：把每个下载事件写成一行 `tracing` 日志。

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::internal::downloader::traits::download_hook::DownloadHook;

use super::download_event::{DownloadEvent, TimedEvent};

/// 将事件转成顺序日志行：大小、切分结果、分片开始/完成/失败、合并开始、完成。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

#[async_trait]
impl DownloadHook for TracingHook {
    async fn on_event(&mut self, event: &TimedEvent) {
        match &event.event {
            DownloadEvent::ProbeStarted { url } => {
                info!(%url, "检查服务器是否支持 Range 请求");
            }
            DownloadEvent::SizeDiscovered { total_size } => {
                info!(total_size, "文件大小 {} 字节", total_size);
            }
            DownloadEvent::RangesPlanned { ranges } => {
                let list = ranges
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                info!(count = ranges.len(), "分片区间: {}", list);
            }
            DownloadEvent::ChunkStarted { range } => {
                info!(index = range.index, "开始下载分片 {}", range);
            }
            DownloadEvent::ChunkFinished { index, bytes } => {
                info!(index, bytes, "分片 {} 下载完成", index);
            }
            DownloadEvent::ChunkFailed { index, error } => {
                warn!(index, %error, "分片 {} 下载失败", index);
            }
            DownloadEvent::MergeStarted { pieces } => {
                info!(pieces, "开始合并分片");
            }
            DownloadEvent::PieceMerged { .. } => {}
            DownloadEvent::Completed { output, total_size } => {
                info!(output = %output.display(), total_size, "下载完成");
            }
            DownloadEvent::Failed { error } => {
                error!(%error, "下载失败");
            }
        }
    }
}
