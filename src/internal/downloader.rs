//! 分片下载器领域模块：探测 → 切分 → 并发拉取 → 合并。
//!
//! 使用方式：`RangeDownloader::new(url).save_to(path).workers(n).with_hook(hook).send().await`
//! 对外导出以 [`crate::downloader`] 为准，此处仅做模块划分，不重复 pub use。

pub mod structs;
pub mod traits;
