//! 分片下载器
//!
//! 给定 URL，先用一次 HEAD 请求确认服务器支持字节区间请求并拿到文件大小，
//! 再把 `[0, size)` 等分成 N 段，每段一个并发任务拉取到独立的分片文件，
//! 全部结束后按序号拼接成目标文件。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use range_downloader::downloader::RangeDownloader;
//! # use range_downloader::downloader::hooks::TracingHook;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = RangeDownloader::new("https://example.com/large.iso")
//!     .save_to("large.iso")
//!     .workers(8)
//!     .with_hook(TracingHook)
//!     .send()
//!     .await?;
//! println!("{} 字节已保存到 {}", report.total_size, report.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## 流程与失败语义
//!
//! - 探测失败（网络错误、非成功状态码、缺少 `Accept-Ranges: bytes`）直接返回
//!   [`DownloadError::RangeUnsupported`]，不会创建任何分片文件；
//! - 各分片互不影响：某个分片失败只发出 `ChunkFailed` 事件，其余分片继续；
//! - 所有分片结束后无条件进入合并，缺失的分片在合并时以 [`MergeError::OpenPiece`] 暴露，
//!   此时已合并的部分和剩余分片都会留在磁盘上；
//! - 默认每个分片一个并发连接，`max_in_flight` 可以设置上限。
//!
//! ## 内部实现说明
//!
//! - `probe`：能力探测
//! - `planner`：区间切分
//! - `scratch`：单次任务专属的分片临时目录
//! - `range_request` / `fetch_one_range`：单段 Range 请求与落盘
//! - `spawn_tasks`：并发任务生成与全量等待
//! - `merge`：按序合并
//! - `coordinator`：串起以上步骤并推进阶段状态
//!
//! [`DownloadError::RangeUnsupported`]: super::download_error::DownloadError::RangeUnsupported
//! [`MergeError::OpenPiece`]: super::download_error::MergeError::OpenPiece

pub(crate) mod coordinator;
pub(crate) mod fetch_one_range;
pub(crate) mod merge;
pub mod planner;
pub mod probe;
pub(crate) mod range_request;
pub(crate) mod scratch;
pub(crate) mod spawn_tasks;

use std::path::{Path, PathBuf};

use reqwest::Client;
use tokio::sync::watch;

use crate::internal::downloader::traits::download_hook::DownloadHook;

use super::download_error::DownloadError;
use super::download_event::TimedEvent;
use super::download_hooks_container::DownloadHooksContainer;
use super::download_job::DownloadJob;
use super::download_phase::DownloadPhase;
use super::download_report::DownloadReport;
use super::downloader_config::DownloaderConfig;
use super::hook_adapters::OnEventHookAdapter;
use coordinator::{run_download, RunDownloadParams};

/// 分片下载器，不实现 Clone：一次 `send()` 对应一个下载任务，分片临时目录也只属于这一次。
pub struct RangeDownloader {
    pub(crate) url: String,
    pub(crate) output: Option<PathBuf>,
    pub(crate) client: Option<Client>,
    pub(crate) config: DownloaderConfig,
    pub(crate) hooks: DownloadHooksContainer,
    pub(crate) phase: watch::Sender<DownloadPhase>,
}

impl RangeDownloader {
    pub fn new(url: impl Into<String>) -> Self {
        let (phase, _) = watch::channel(DownloadPhase::Idle);
        Self {
            url: url.into(),
            output: None,
            client: None,
            config: DownloaderConfig::default(),
            hooks: DownloadHooksContainer::default(),
            phase,
        }
    }

    /// 由已校验的任务创建下载器（沿用其 URL、输出路径与分片数）。
    pub fn from_job(job: DownloadJob) -> Self {
        Self::new(job.url.as_str())
            .save_to(job.output)
            .workers(job.workers)
    }

    /// 设置目标文件路径；传空路径等同于未设置，`send()` 时会报错。
    pub fn save_to(mut self, path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        self.output = if p.as_os_str().is_empty() {
            None
        } else {
            Some(p.to_path_buf())
        };
        self
    }

    /// 设置分片数（每个分片一个并发任务）。
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// 设置同时进行的分片请求上限；不调用则不限制。
    pub fn max_in_flight(mut self, n: usize) -> Self {
        self.config.max_in_flight = Some(n);
        self
    }

    /// 设置分片临时目录的父目录；默认使用系统临时目录。
    pub fn scratch_root(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.scratch_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// 设置 User-Agent；仅在未通过 `with_client` 提供客户端时生效。
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// 使用外部的 HTTP 客户端。
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// 用整份配置替换当前配置。
    pub fn with_config(mut self, config: DownloaderConfig) -> Self {
        self.config = config;
        self
    }

    /// 添加完整钩子，接收下载各阶段的事件。
    pub fn with_hook(mut self, hook: impl DownloadHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 注册事件闭包钩子。
    pub fn with_on_event_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TimedEvent) + Send + Sync + 'static,
    {
        self.hooks.add(OnEventHookAdapter(f));
        self
    }

    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// 下载阶段的监听端；需在 `send()` 之前获取。
    pub fn phase(&self) -> watch::Receiver<DownloadPhase> {
        self.phase.subscribe()
    }

    /// 执行下载：探测 → 切分 → 并发拉取 → 合并。
    pub async fn send(self) -> Result<DownloadReport, DownloadError> {
        let output = self
            .output
            .ok_or_else(|| DownloadError::InvalidJob("未设置保存路径".to_string()))?;
        let job = DownloadJob::new(&self.url, output, self.config.workers)?;

        if self.config.max_in_flight == Some(0) {
            return Err(DownloadError::InvalidJob(
                "max_in_flight 必须大于 0".to_string(),
            ));
        }

        let client = match self.client {
            Some(c) => c,
            None => Client::builder()
                .user_agent(self.config.user_agent.as_str())
                .build()
                .map_err(DownloadError::Client)?,
        };

        run_download(RunDownloadParams {
            client,
            job,
            config: self.config,
            hooks: self.hooks.into_shared(),
            phase: self.phase,
        })
        .await
    }
}
