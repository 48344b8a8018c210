//! 发起单段 Range 请求，返回响应供流式读取。

use reqwest::header::RANGE;
use reqwest::{Client, Response};

use super::super::download_error::ChunkFetchError;

/// 发起 Range 请求时的参数。
pub(crate) struct FetchRangeParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    /// 完整的 Range 头值，如 `bytes=0-99`
    pub range: &'a str,
}

/// 发起单段 Range GET 请求；状态码非成功时返回错误，成功时交给调用方 `bytes_stream()`。
pub(crate) async fn fetch_range_response(
    params: FetchRangeParams<'_>,
) -> Result<Response, ChunkFetchError> {
    let resp = params
        .client
        .get(params.url)
        .header(RANGE, params.range)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ChunkFetchError::Status(status));
    }

    Ok(resp)
}
