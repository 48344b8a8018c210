use std::path::{Path, PathBuf};

use url::Url;

use super::byte_range::ByteRange;
use super::download_error::DownloadError;

/// 一次下载任务。由协调器独占，仅在单次 `download` 调用内有效。
///
/// `total_size` 与 `ranges` 在探测、切分之后才会被填上。
#[derive(Debug, Clone)]
pub struct DownloadJob {
    pub url: Url,
    pub output: PathBuf,
    pub workers: usize,
    pub total_size: Option<u64>,
    pub ranges: Vec<ByteRange>,
}

impl DownloadJob {
    /// 校验参数并创建任务：URL 必须是 http(s)，输出路径不能为空，分片数必须大于 0。
    pub fn new(
        url: &str,
        output: impl AsRef<Path>,
        workers: usize,
    ) -> Result<Self, DownloadError> {
        let url = Url::parse(url)
            .map_err(|e| DownloadError::InvalidJob(format!("URL 无效: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DownloadError::InvalidJob(format!(
                "仅支持 http/https，当前为 {}",
                url.scheme()
            )));
        }

        let output = output.as_ref();
        if output.as_os_str().is_empty() {
            return Err(DownloadError::InvalidJob("输出路径为空".to_string()));
        }

        if workers == 0 {
            return Err(DownloadError::InvalidJob("分片数必须大于 0".to_string()));
        }

        Ok(Self {
            url,
            output: output.to_path_buf(),
            workers,
            total_size: None,
            ranges: Vec::new(),
        })
    }
}
