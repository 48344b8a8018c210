//! 单个分片：请求一段区间，流式写入该分片专属的文件。

use std::path::PathBuf;

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::{Client, Response};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::warn;

use super::super::byte_range::ByteRange;
use super::super::download_error::ChunkFetchError;
use super::range_request::{fetch_range_response, FetchRangeParams};

/// 拉取单个分片时的参数。
pub(crate) struct FetchOneRangeParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    pub range: ByteRange,
    pub piece_path: PathBuf,
}

/// 拉取一个分片并写入 `piece_path`，返回写入的字节数。不重试。
///
/// 空区间不发请求，只创建空文件。数据先写入临时文件，成功后才出现在 `piece_path`，
/// 失败的分片在合并时一律表现为文件缺失。
pub(crate) async fn fetch_one_range(
    params: FetchOneRangeParams<'_>,
) -> Result<u64, ChunkFetchError> {
    let header = match params.range.header_value() {
        Some(h) => h,
        None => {
            File::create(&params.piece_path)
                .await
                .map_err(ChunkFetchError::CreateFile)?;
            return Ok(0);
        }
    };

    let resp = fetch_range_response(FetchRangeParams {
        client: params.client,
        url: params.url,
        range: &header,
    })
    .await?;

    // 先写到 `<index>.part`，完整写完才改名；删不掉的残片不会被合并读到
    let partial_path = params.piece_path.with_extension("part");
    let file = File::create(&partial_path)
        .await
        .map_err(ChunkFetchError::CreateFile)?;

    let result = match stream_into_piece(resp, file, params.range.len).await {
        Ok(written) => tokio::fs::rename(&partial_path, &params.piece_path)
            .await
            .map(|_| written)
            .map_err(ChunkFetchError::WriteFile),
        Err(e) => Err(e),
    };
    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(&partial_path).await {
            warn!(
                index = params.range.index,
                path = %partial_path.display(),
                error = %e,
                "删除失败分片的残留文件失败"
            );
        }
    }
    result
}

/// 把响应体写进分片文件；文件句柄在返回前关闭。
async fn stream_into_piece(
    resp: Response,
    file: File,
    expected: u64,
) -> Result<u64, ChunkFetchError> {
    let mut writer = BufWriter::new(file);
    let mut stream = resp.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk: Bytes = chunk_result?;
        written += chunk.len() as u64;
        // 服务器忽略 Range 返回整个文件时尽早停下
        if written > expected {
            return Err(ChunkFetchError::LengthMismatch {
                expected,
                actual: written,
            });
        }
        writer
            .write_all(&chunk)
            .await
            .map_err(ChunkFetchError::WriteFile)?;
    }

    writer.flush().await.map_err(ChunkFetchError::WriteFile)?;

    if written != expected {
        return Err(ChunkFetchError::LengthMismatch {
            expected,
            actual: written,
        });
    }

    Ok(written)
}
