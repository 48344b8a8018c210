//! 从 URL 推导默认的输出文件名。

use percent_encoding::percent_decode_str;
use sanitize_filename::sanitize;
use url::Url;

/// 无法从 URL 得到文件名时使用的默认名。
pub const FALLBACK_FILENAME: &str = "output.bin";

/// 取 URL 路径最后一段，URL 解码后去掉系统不允许的字符；得不到有效名字时返回 `output.bin`。
///
/// 查询参数与片段不参与；以 `/` 结尾的路径没有文件名。
pub fn filename_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut s| s.next_back().map(|last| last.to_string()))
        })
        .map(|s| percent_decode_str(&s).decode_utf8_lossy().into_owned())
        .map(sanitize)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}
