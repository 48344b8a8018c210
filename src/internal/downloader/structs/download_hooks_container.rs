use std::sync::Arc;

use tokio::sync::Mutex;

use crate::internal::downloader::traits::download_hook::DownloadHook;

use super::download_event::{DownloadEvent, TimedEvent};

/// 各分片任务共享的钩子容器句柄。
pub type SharedHooks = Arc<Mutex<DownloadHooksContainer>>;

/// 钩子容器：按注册顺序保存多个钩子。
#[derive(Default)]
pub struct DownloadHooksContainer {
    hooks: Vec<Box<dyn DownloadHook>>,
}

impl DownloadHooksContainer {
    /// 添加一个钩子；支持多次调用以注册多个钩子，按添加顺序依次执行。
    pub fn add(&mut self, hook: impl DownloadHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// 给事件打上时间戳，依次交给每个钩子。
    pub async fn emit(&mut self, event: DownloadEvent) {
        if self.hooks.is_empty() {
            return;
        }
        let timed = TimedEvent::now(event);
        for h in self.hooks.iter_mut() {
            h.on_event(&timed).await;
        }
    }

    pub fn into_shared(self) -> SharedHooks {
        Arc::new(Mutex::new(self))
    }
}

/// 通过共享句柄发出事件（拿锁 → 依次执行钩子 → 释放锁）。
pub async fn emit_shared(hooks: &SharedHooks, event: DownloadEvent) {
    hooks.lock().await.emit(event).await;
}
