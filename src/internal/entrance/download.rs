use crate::internal::downloader::structs::tracing_hook::TracingHook;
use crate::internal::downloader::structs::{
    DownloadError, DownloadJob, DownloadReport, RangeDownloader,
};

/// 按任务描述执行一次分片下载，进度以 `tracing` 日志输出。
///
/// 只有探测失败（[`DownloadError::RangeUnsupported`]）和合并失败（[`DownloadError::Merge`]）
/// 会返回给调用方；单个分片失败只记录日志，并在合并时以缺失分片的形式暴露。
///
/// 需要自定义客户端、并发上限或事件钩子时，改用 [`RangeDownloader`]。
///
/// example:
/// ```rust,no_run
/// # use range_downloader::{download, downloader::DownloadJob};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let job = DownloadJob::new("https://example.com/file.bin", "file.bin", 10)?;
/// let report = download(job).await?;
/// println!("{} 字节", report.total_size);
/// # Ok(())
/// # }
/// ```
pub async fn download(job: DownloadJob) -> Result<DownloadReport, DownloadError> {
    RangeDownloader::from_job(job)
        .with_hook(TracingHook)
        .send()
        .await
}
