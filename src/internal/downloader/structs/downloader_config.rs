use std::path::PathBuf;

/// 默认分片数（同时也是默认并发连接数）
pub const DEFAULT_WORKERS: usize = 10;

/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("range-downloader/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// 分片数；每个分片一个并发任务
    pub workers: usize,
    /// 同时进行的分片请求上限；`None` 表示不设上限（分片数即并发连接数）
    pub max_in_flight: Option<usize>,
    /// 分片临时目录的父目录；`None` 时使用系统临时目录
    pub scratch_root: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            max_in_flight: None,
            scratch_root: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
