pub mod byte_range;
pub mod channel_hook;
pub mod download_error;
pub mod download_event;
pub mod download_hooks_container;
pub mod download_job;
pub mod download_phase;
pub mod download_report;
pub mod downloader_config;
pub mod hook_adapters;
pub mod range_downloader;
pub mod tracing_hook;

// 重导出公共类型
pub use byte_range::ByteRange;
pub use download_error::{ChunkFetchError, DownloadError, MergeError, RangeUnsupportedError};
pub use download_event::{DownloadEvent, TimedEvent};
pub use download_hooks_container::DownloadHooksContainer;
pub use download_job::DownloadJob;
pub use download_phase::DownloadPhase;
pub use download_report::DownloadReport;
pub use downloader_config::{DownloaderConfig, DEFAULT_USER_AGENT, DEFAULT_WORKERS};
pub use range_downloader::RangeDownloader;
pub use range_downloader::planner::plan_ranges;
pub use range_downloader::probe::{probe, ProbeInfo};
