//! 闭包钩子适配器：将闭包包装成 [`DownloadHook`]，供 `with_on_event_hook` 使用。

use async_trait::async_trait;

use crate::internal::downloader::structs::download_event::TimedEvent;
use crate::internal::downloader::traits::download_hook::DownloadHook;

/// 仅处理事件的同步闭包适配器。
pub(crate) struct OnEventHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> DownloadHook for OnEventHookAdapter<F>
where
    F: FnMut(&TimedEvent) + Send + Sync + 'static,
{
    async fn on_event(&mut self, event: &TimedEvent) {
        (self.0)(event);
    }
}
