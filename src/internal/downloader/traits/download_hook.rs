//! 下载相关 trait：事件钩子接口，供下载器领域模块调用。
//!
//! 下载器在探测、切分、各分片拉取、合并等阶段发出 [`TimedEvent`]；
//! 对外使用入口为 [`crate::downloader::hooks`]。

use async_trait::async_trait;

use crate::internal::downloader::structs::download_event::TimedEvent;

/// 下载事件钩子：接收下载流程中的每一个事件。
///
/// 使用方式二选一（可混用）：
/// - **闭包**：用下载器的 `with_on_event_hook` 传入同步闭包；
/// - **完整钩子**：实现本 trait，通过下载器的 `with_hook` 注册。
///
/// 多个分片任务共享同一组钩子，调用是串行的（容器外层有互斥锁），
/// 因此实现里不需要再做同步，但也不应长时间阻塞。
#[async_trait]
pub trait DownloadHook: Send + Sync {
    /// 收到一个事件。
    async fn on_event(&mut self, event: &TimedEvent);
}
