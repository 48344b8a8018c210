//! 内置钩子：把事件转发到 mpsc 通道，便于调用方在别处消费（或在测试里断言）。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::internal::downloader::traits::download_hook::DownloadHook;

use super::download_event::TimedEvent;

/// 有界通道转发钩子。发送不等待：通道满时丢弃事件并计数，接收端关闭后事件直接丢弃，
/// 消费方读得慢不会拖住下载流程。
#[derive(Debug, Clone)]
pub struct ChannelHook {
    sender: mpsc::Sender<TimedEvent>,
    dropped: Arc<AtomicU64>,
}

impl ChannelHook {
    pub fn new(sender: mpsc::Sender<TimedEvent>) -> Self {
        Self {
            sender,
            dropped: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 创建钩子以及对应的接收端。
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<TimedEvent>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self::new(sender), receiver)
    }

    /// 因通道已满而丢弃的事件数（克隆之间共享）。
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DownloadHook for ChannelHook {
    async fn on_event(&mut self, event: &TimedEvent) {
        if let Err(TrySendError::Full(_)) = self.sender.try_send(event.clone()) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}
