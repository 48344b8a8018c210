//! 下载相关错误类型。
//!
//! 只有 [`DownloadError`] 会返回给调用方；[`ChunkFetchError`] 只记录在分片结果与事件里，
//! 缺失的分片在合并阶段以 [`MergeError::OpenPiece`] 的形式暴露。

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// 探测失败：服务器不可达、状态码非成功，或未声明支持 Range。
#[derive(Debug, Error)]
pub enum RangeUnsupportedError {
    #[error("探测请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("探测响应状态码非成功: {0}")]
    Status(StatusCode),

    #[error("响应未声明 Accept-Ranges: bytes")]
    MissingAcceptRanges,

    #[error("响应缺少 Content-Length")]
    MissingContentLength,

    #[error("Content-Length 无法解析: {0}")]
    InvalidContentLength(String),
}

/// 单个分片拉取失败；不会中止其他分片，也不会直接让整个任务失败。
#[derive(Debug, Error)]
pub enum ChunkFetchError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("分片响应状态码非成功: {0}")]
    Status(StatusCode),

    #[error("创建分片文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入分片文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("分片长度不符：期望 {expected} 字节，实际 {actual} 字节")]
    LengthMismatch { expected: u64, actual: u64 },

    #[error("分片任务失败: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// 合并失败：目标文件无法创建，或某个分片文件缺失/不可读。
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("创建目标文件失败: {0}")]
    CreateDestination(std::io::Error),

    #[error("打开分片 {index} 失败（{}）: {source}", .path.display())]
    OpenPiece {
        index: usize,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("拷贝分片 {index} 失败: {source}")]
    CopyPiece {
        index: usize,
        source: std::io::Error,
    },

    #[error("刷新目标文件失败: {0}")]
    Flush(std::io::Error),
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("下载任务参数无效: {0}")]
    InvalidJob(String),

    #[error("创建 HTTP 客户端失败: {0}")]
    Client(reqwest::Error),

    #[error("服务器不支持 Range 请求: {0}")]
    RangeUnsupported(#[from] RangeUnsupportedError),

    #[error("创建分片临时目录失败: {0}")]
    ScratchSpace(std::io::Error),

    #[error("合并分片失败: {0}")]
    Merge(#[from] MergeError),
}
