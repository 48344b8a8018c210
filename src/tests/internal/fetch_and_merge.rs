//! 单分片拉取与合并测试。
//!
//! 测试项：
//! - 分片内容与服务器对应区间一致
//! - 服务器报错时不留下分片文件
//! - 空区间不发请求，只创建空文件
//! - 服务器忽略 Range 返回整文件时报长度不符，不留下任何分片或残片
//! - 按序号合并，合并后删除分片
//! - 缺失分片时报错，已合并内容保留，剩余分片保留

use crate::internal::downloader::structs::download_hooks_container::DownloadHooksContainer;
use crate::internal::downloader::structs::range_downloader::fetch_one_range::{
    fetch_one_range, FetchOneRangeParams,
};
use crate::internal::downloader::structs::range_downloader::merge::{
    merge_pieces, MergePiecesParams,
};
use crate::internal::downloader::structs::range_downloader::scratch::ScratchSpace;
use crate::downloader::{plan_ranges, ByteRange, ChunkFetchError, MergeError};
use crate::tests::{list_dir, pattern, start_server, test_client, TestServerOptions};

// ═══════════════════════════════════════════════════════════════════════════
// 单分片拉取
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn fetch_writes_exact_range() {
    let body = pattern(1000);
    let server = start_server(TestServerOptions::with_body(body.clone())).await;
    let dir = tempfile::tempdir().unwrap();
    let piece_path = dir.path().join("1");

    let written = fetch_one_range(FetchOneRangeParams {
        client: &test_client(),
        url: &server.url(),
        range: ByteRange::new(1, 250, 250),
        piece_path: piece_path.clone(),
    })
    .await
    .expect("拉取应成功");

    assert_eq!(written, 250);
    let content = std::fs::read(&piece_path).unwrap();
    assert_eq!(content, body[250..500]);
    assert_eq!(list_dir(dir.path()), vec!["1".to_string()], "写完后不应留下临时文件");
    assert_eq!(server.range_requests(), 1);
}

#[tokio::test]
async fn fetch_error_status_leaves_no_piece() {
    let mut opts = TestServerOptions::with_body(pattern(1000));
    opts.fail_range_starts = vec![500];
    let server = start_server(opts).await;
    let dir = tempfile::tempdir().unwrap();
    let piece_path = dir.path().join("2");

    let err = fetch_one_range(FetchOneRangeParams {
        client: &test_client(),
        url: &server.url(),
        range: ByteRange::new(2, 500, 250),
        piece_path: piece_path.clone(),
    })
    .await
    .unwrap_err();

    assert!(matches!(err, ChunkFetchError::Status(_)), "实际错误: {:?}", err);
    assert!(!piece_path.exists(), "失败的分片不应留下文件");
}

#[tokio::test]
async fn fetch_empty_range_skips_request() {
    let server = start_server(TestServerOptions::with_body(pattern(5))).await;
    let dir = tempfile::tempdir().unwrap();
    let piece_path = dir.path().join("0");

    let written = fetch_one_range(FetchOneRangeParams {
        client: &test_client(),
        url: &server.url(),
        range: ByteRange::new(0, 0, 0),
        piece_path: piece_path.clone(),
    })
    .await
    .expect("空区间应成功");

    assert_eq!(written, 0);
    assert_eq!(std::fs::metadata(&piece_path).unwrap().len(), 0);
    assert_eq!(server.range_requests(), 0, "空区间不应发请求");
}

#[tokio::test]
async fn fetch_detects_ignored_range() {
    let mut opts = TestServerOptions::with_body(pattern(1000));
    opts.ignore_range = true;
    let server = start_server(opts).await;
    let dir = tempfile::tempdir().unwrap();
    let piece_path = dir.path().join("0");

    let err = fetch_one_range(FetchOneRangeParams {
        client: &test_client(),
        url: &server.url(),
        range: ByteRange::new(0, 0, 100),
        piece_path: piece_path.clone(),
    })
    .await
    .unwrap_err();

    match err {
        ChunkFetchError::LengthMismatch { expected, actual } => {
            assert_eq!(expected, 100);
            assert!(actual > 100, "实际收到 {} 字节", actual);
        }
        other => panic!("应为长度不符，实际: {:?}", other),
    }
    assert!(!piece_path.exists());
    assert!(list_dir(dir.path()).is_empty(), "写了一半的数据也不应留下");
}

// ═══════════════════════════════════════════════════════════════════════════
// 合并
// ═══════════════════════════════════════════════════════════════════════════

/// 把 `body` 按 `ranges` 切开写成分片文件。
fn write_pieces(scratch: &ScratchSpace, ranges: &[ByteRange], body: &[u8]) {
    for r in ranges {
        let slice = &body[r.start as usize..r.end_exclusive() as usize];
        std::fs::write(scratch.piece_path(r.index), slice).unwrap();
    }
}

#[tokio::test]
async fn merge_concatenates_in_index_order() {
    let body = pattern(1003);
    let dir = tempfile::tempdir().unwrap();
    let scratch_dir = dir.path().join("parts");
    std::fs::create_dir(&scratch_dir).unwrap();
    let scratch = ScratchSpace::from_dir(&scratch_dir);
    let ranges = plan_ranges(body.len() as u64, 4);
    // 倒序写入，确认合并顺序只看序号
    let mut reversed = ranges.clone();
    reversed.reverse();
    write_pieces(&scratch, &reversed, &body);

    let destination = dir.path().join("out.bin");
    let hooks = DownloadHooksContainer::default().into_shared();
    let merged = merge_pieces(MergePiecesParams {
        scratch: &scratch,
        ranges: &ranges,
        destination: &destination,
        hooks: &hooks,
    })
    .await
    .expect("合并应成功");

    assert_eq!(merged, 1003);
    assert_eq!(std::fs::read(&destination).unwrap(), body);
    assert!(list_dir(&scratch_dir).is_empty(), "合并后分片应被删除");
}

#[tokio::test]
async fn merge_stops_at_missing_piece() {
    let body = pattern(1000);
    let dir = tempfile::tempdir().unwrap();
    let scratch_dir = dir.path().join("parts");
    std::fs::create_dir(&scratch_dir).unwrap();
    let scratch = ScratchSpace::from_dir(&scratch_dir);
    let ranges = plan_ranges(1000, 4);
    let present: Vec<ByteRange> = ranges.iter().copied().filter(|r| r.index != 2).collect();
    write_pieces(&scratch, &present, &body);

    let destination = dir.path().join("out.bin");
    let hooks = DownloadHooksContainer::default().into_shared();
    let err = merge_pieces(MergePiecesParams {
        scratch: &scratch,
        ranges: &ranges,
        destination: &destination,
        hooks: &hooks,
    })
    .await
    .unwrap_err();

    match err {
        MergeError::OpenPiece { index, path, .. } => {
            assert_eq!(index, 2);
            assert_eq!(path, scratch.piece_path(2));
        }
        other => panic!("应为缺失分片，实际: {:?}", other),
    }
    assert_eq!(
        std::fs::read(&destination).unwrap(),
        body[..500],
        "缺失分片之前的内容应已写入"
    );
    assert_eq!(list_dir(&scratch_dir), vec!["3".to_string()]);
}
