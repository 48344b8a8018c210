//! 生成并 spawn 各分片任务，以及等待所有任务结束。

use std::sync::Arc;

use futures_util::future::join_all;
use reqwest::Client;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use super::super::byte_range::ByteRange;
use super::super::download_error::ChunkFetchError;
use super::super::download_event::DownloadEvent;
use super::super::download_hooks_container::{emit_shared, SharedHooks};
use super::fetch_one_range::{fetch_one_range, FetchOneRangeParams};
use super::scratch::ScratchSpace;

/// 单个分片的结果：只记录，不在等待阶段检查。
#[derive(Debug)]
pub(crate) struct ChunkOutcome {
    pub index: usize,
    pub result: Result<u64, ChunkFetchError>,
}

/// 单个分片任务句柄：(index, JoinHandle)。
pub(crate) type RangeTaskHandle = (usize, JoinHandle<ChunkOutcome>);

/// 生成并 spawn 分片任务时的参数。
pub(crate) struct SpawnRangeTasksParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    pub ranges: &'a [ByteRange],
    pub scratch: &'a ScratchSpace,
    /// `None` 表示不限并发，每个分片立即开始
    pub semaphore: Option<Arc<Semaphore>>,
    pub hooks: &'a SharedHooks,
}

/// 每个区间 spawn 一个任务；任务之间没有共享的取消信号，一个失败不影响其他。
pub(crate) fn spawn_range_tasks(params: SpawnRangeTasksParams<'_>) -> Vec<RangeTaskHandle> {
    params
        .ranges
        .iter()
        .map(|range| {
            let range = *range;
            let client = params.client.clone();
            let url = params.url.to_string();
            let piece_path = params.scratch.piece_path(range.index);
            let sem = params.semaphore.clone();
            let hooks = Arc::clone(params.hooks);

            let handle = tokio::spawn(async move {
                let _permit = match sem {
                    Some(s) => s.acquire_owned().await.ok(),
                    None => None,
                };

                emit_shared(&hooks, DownloadEvent::ChunkStarted { range }).await;

                let result = fetch_one_range(FetchOneRangeParams {
                    client: &client,
                    url: &url,
                    range,
                    piece_path,
                })
                .await;

                let event = match &result {
                    Ok(bytes) => DownloadEvent::ChunkFinished {
                        index: range.index,
                        bytes: *bytes,
                    },
                    Err(e) => DownloadEvent::ChunkFailed {
                        index: range.index,
                        error: e.to_string(),
                    },
                };
                emit_shared(&hooks, event).await;

                ChunkOutcome {
                    index: range.index,
                    result,
                }
            });

            (range.index, handle)
        })
        .collect()
}

/// 等待全部分片任务结束（成功或失败都等），按 index 顺序返回结果；不因首个失败提前返回。
pub(crate) async fn join_range_tasks(handles: Vec<RangeTaskHandle>) -> Vec<ChunkOutcome> {
    let (indices, handles): (Vec<usize>, Vec<_>) = handles.into_iter().unzip();

    join_all(handles)
        .await
        .into_iter()
        .zip(indices)
        .map(|(joined, index)| match joined {
            Ok(outcome) => outcome,
            Err(join_err) => ChunkOutcome {
                index,
                result: Err(ChunkFetchError::TaskJoin(join_err)),
            },
        })
        .collect()
}
