//! 从 URL 推导文件名的测试。

use crate::utils::{filename_from_url, FALLBACK_FILENAME};

#[test]
fn takes_last_path_segment() {
    assert_eq!(
        filename_from_url("https://example.com/pub/releases/app-1.2.tar.gz"),
        "app-1.2.tar.gz"
    );
}

#[test]
fn ignores_query_and_fragment() {
    assert_eq!(
        filename_from_url("https://example.com/dl/file.iso?token=abc#part"),
        "file.iso"
    );
}

#[test]
fn decodes_percent_encoding() {
    assert_eq!(
        filename_from_url("https://example.com/%E6%96%87%E4%BB%B6%20a.zip"),
        "文件 a.zip"
    );
}

#[test]
fn strips_illegal_characters() {
    // %2F 解码后是路径分隔符，不能出现在文件名里
    let name = filename_from_url("https://example.com/a%2Fb.txt");
    assert!(!name.contains('/'), "实际: {}", name);
    assert!(name.ends_with("b.txt"));
}

#[test]
fn falls_back_without_name() {
    assert_eq!(filename_from_url("https://example.com/"), FALLBACK_FILENAME);
    assert_eq!(filename_from_url("https://example.com"), FALLBACK_FILENAME);
    assert_eq!(filename_from_url("not a url"), FALLBACK_FILENAME);
}
