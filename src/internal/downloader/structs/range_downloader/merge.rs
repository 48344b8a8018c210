//! 合并：按序号把分片文件追加到目标文件，追加完即删除该分片。

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::warn;

use super::super::byte_range::ByteRange;
use super::super::download_error::MergeError;
use super::super::download_event::DownloadEvent;
use super::super::download_hooks_container::{emit_shared, SharedHooks};
use super::scratch::ScratchSpace;

/// 合并分片时的参数。
pub(crate) struct MergePiecesParams<'a> {
    pub scratch: &'a ScratchSpace,
    /// 按 index 升序
    pub ranges: &'a [ByteRange],
    pub destination: &'a Path,
    pub hooks: &'a SharedHooks,
}

/// 创建（或截断）目标文件，依次追加每个分片，返回写入的总字节数。
///
/// 任一分片打不开就立即停止；已追加的内容和剩余分片都保留在磁盘上。
pub(crate) async fn merge_pieces(params: MergePiecesParams<'_>) -> Result<u64, MergeError> {
    let file = File::create(params.destination)
        .await
        .map_err(MergeError::CreateDestination)?;
    let mut writer = BufWriter::new(file);
    let mut total: u64 = 0;

    for range in params.ranges {
        let path = params.scratch.piece_path(range.index);

        let mut piece = match File::open(&path).await {
            Ok(f) => f,
            Err(source) => {
                if let Err(e) = writer.flush().await {
                    warn!(error = %e, "写出已合并内容失败");
                }
                return Err(MergeError::OpenPiece {
                    index: range.index,
                    path,
                    source,
                });
            }
        };

        let bytes = tokio::io::copy(&mut piece, &mut writer)
            .await
            .map_err(|source| MergeError::CopyPiece {
                index: range.index,
                source,
            })?;
        drop(piece);

        if let Err(e) = tokio::fs::remove_file(&path).await {
            warn!(index = range.index, error = %e, "删除分片文件失败");
        }

        total += bytes;
        emit_shared(
            params.hooks,
            DownloadEvent::PieceMerged {
                index: range.index,
                bytes,
            },
        )
        .await;
    }

    writer.flush().await.map_err(MergeError::Flush)?;

    Ok(total)
}
