//! 协调器：探测 → 切分 → 并发拉取（全量等待）→ 无条件合并，并推进阶段状态。

use std::sync::Arc;

use reqwest::Client;
use tokio::sync::{watch, Semaphore};
use tracing::{debug, warn};

use super::super::download_error::DownloadError;
use super::super::download_event::DownloadEvent;
use super::super::download_hooks_container::{emit_shared, SharedHooks};
use super::super::download_job::DownloadJob;
use super::super::download_phase::DownloadPhase;
use super::super::download_report::DownloadReport;
use super::super::downloader_config::DownloaderConfig;
use super::merge::{merge_pieces, MergePiecesParams};
use super::planner::plan_ranges;
use super::probe::probe;
use super::scratch::ScratchSpace;
use super::spawn_tasks::{join_range_tasks, spawn_range_tasks, SpawnRangeTasksParams};

/// 执行一次下载所需的全部输入。
pub(crate) struct RunDownloadParams {
    pub client: Client,
    pub job: DownloadJob,
    pub config: DownloaderConfig,
    pub hooks: SharedHooks,
    pub phase: watch::Sender<DownloadPhase>,
}

/// 严格按顺序执行各步骤，前一步结束后才开始下一步。
pub(crate) async fn run_download(params: RunDownloadParams) -> Result<DownloadReport, DownloadError> {
    let RunDownloadParams {
        client,
        mut job,
        config,
        hooks,
        phase,
    } = params;

    // 1. 探测
    phase.send_replace(DownloadPhase::Probing);
    emit_shared(
        &hooks,
        DownloadEvent::ProbeStarted {
            url: job.url.to_string(),
        },
    )
    .await;

    let info = match probe(&client, job.url.as_str()).await {
        Ok(info) => info,
        Err(e) => return fail(&hooks, &phase, e.into()).await,
    };
    job.total_size = Some(info.total_size);
    emit_shared(
        &hooks,
        DownloadEvent::SizeDiscovered {
            total_size: info.total_size,
        },
    )
    .await;

    // 探测通过后才准备分片目录，仍属于探测阶段
    let scratch = match ScratchSpace::create(config.scratch_root.as_deref(), &job.output) {
        Ok(s) => s,
        Err(e) => return fail(&hooks, &phase, DownloadError::ScratchSpace(e)).await,
    };
    debug!(dir = %scratch.dir().display(), "分片临时目录已创建");

    // 2. 切分
    phase.send_replace(DownloadPhase::Planning);
    job.ranges = plan_ranges(info.total_size, job.workers);
    emit_shared(
        &hooks,
        DownloadEvent::RangesPlanned {
            ranges: job.ranges.clone(),
        },
    )
    .await;

    // 3. 每个区间一个并发任务；4. 全部结束后才继续
    phase.send_replace(DownloadPhase::Fetching);
    let handles = spawn_range_tasks(SpawnRangeTasksParams {
        client: &client,
        url: job.url.as_str(),
        ranges: &job.ranges,
        scratch: &scratch,
        semaphore: config.max_in_flight.map(|n| Arc::new(Semaphore::new(n))),
        hooks: &hooks,
    });
    let outcomes = join_range_tasks(handles).await;

    let failed: Vec<usize> = outcomes
        .iter()
        .filter(|o| o.result.is_err())
        .map(|o| o.index)
        .collect();
    if !failed.is_empty() {
        debug!(?failed, "部分分片失败，合并时会暴露缺失的分片");
    }

    // 5. 无条件合并
    phase.send_replace(DownloadPhase::Merging);
    emit_shared(
        &hooks,
        DownloadEvent::MergeStarted {
            pieces: job.ranges.len(),
        },
    )
    .await;

    let merged_bytes = match merge_pieces(MergePiecesParams {
        scratch: &scratch,
        ranges: &job.ranges,
        destination: &job.output,
        hooks: &hooks,
    })
    .await
    {
        Ok(n) => n,
        Err(e) => return fail(&hooks, &phase, e.into()).await,
    };
    debug!(merged_bytes, "分片合并完成");

    if let Err(e) = scratch.remove().await {
        warn!(dir = %scratch.dir().display(), error = %e, "删除分片临时目录失败");
    }

    // 6. 完成
    phase.send_replace(DownloadPhase::Done);
    emit_shared(
        &hooks,
        DownloadEvent::Completed {
            output: job.output.clone(),
            total_size: info.total_size,
        },
    )
    .await;

    Ok(DownloadReport {
        output: job.output,
        total_size: info.total_size,
        ranges: job.ranges,
    })
}

/// 进入 `Failed`，发出失败事件后原样返回错误。
async fn fail(
    hooks: &SharedHooks,
    phase: &watch::Sender<DownloadPhase>,
    error: DownloadError,
) -> Result<DownloadReport, DownloadError> {
    phase.send_replace(DownloadPhase::Failed);
    emit_shared(
        hooks,
        DownloadEvent::Failed {
            error: error.to_string(),
        },
    )
    .await;
    Err(error)
}
