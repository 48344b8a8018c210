//! 能力探测：一次 HEAD 请求，确认服务器支持 Range 并拿到文件总大小。

use reqwest::header::{HeaderMap, ACCEPT_RANGES, CONTENT_LENGTH};
use reqwest::{Client, StatusCode};

use super::super::download_error::RangeUnsupportedError;

/// 探测结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeInfo {
    /// 服务器声明的文件总大小（字节）
    pub total_size: u64,
    /// 是否支持字节区间请求；探测成功时恒为 `true`
    pub supports_ranges: bool,
}

/// 发送 HEAD 请求探测 `url`，不重试。
///
/// 仅当状态码为成功、且响应头带有 `Accept-Ranges: bytes` 与合法的 `Content-Length` 时返回成功。
pub async fn probe(client: &Client, url: &str) -> Result<ProbeInfo, RangeUnsupportedError> {
    let resp = client.head(url).send().await?;

    probe_info_from_head(resp.status(), resp.headers())
}

/// 根据 HEAD 响应的状态码与响应头判断能力并取出文件大小。
pub(crate) fn probe_info_from_head(
    status: StatusCode,
    headers: &HeaderMap,
) -> Result<ProbeInfo, RangeUnsupportedError> {
    if !status.is_success() {
        return Err(RangeUnsupportedError::Status(status));
    }

    let accepts_bytes = headers
        .get(ACCEPT_RANGES)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().eq_ignore_ascii_case("bytes"))
        .unwrap_or(false);
    if !accepts_bytes {
        return Err(RangeUnsupportedError::MissingAcceptRanges);
    }

    // HEAD 响应没有响应体，不能用 `resp.content_length()`，直接读头
    let raw = headers
        .get(CONTENT_LENGTH)
        .ok_or(RangeUnsupportedError::MissingContentLength)?;
    let total_size = raw
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .ok_or_else(|| {
            RangeUnsupportedError::InvalidContentLength(
                String::from_utf8_lossy(raw.as_bytes()).into_owned(),
            )
        })?;

    Ok(ProbeInfo {
        total_size,
        supports_ranges: true,
    })
}
