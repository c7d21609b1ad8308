//! 把变更通知转发到 tokio 广播通道，供异步消费者订阅

use tokio::sync::broadcast;
use tracing::trace;

use super::events::{QuizEvent, QuizObserver};
use super::QuizStore;

#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: broadcast::Sender<QuizEvent>,
}

impl ChannelObserver {
    /// 创建广播通道，返回观察者和第一个接收端
    ///
    /// 容量至少为 1，传入 0 时按 1 处理。
    pub fn new(capacity: usize) -> (Self, broadcast::Receiver<QuizEvent>) {
        let (tx, rx) = broadcast::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// 新增一个接收端
    pub fn receiver(&self) -> broadcast::Receiver<QuizEvent> {
        self.tx.subscribe()
    }
}

impl QuizObserver for ChannelObserver {
    fn on_event(&mut self, event: &QuizEvent, _store: &QuizStore) {
        // 没有接收端时发送失败，直接忽略
        if self.tx.send(event.clone()).is_err() {
            trace!("没有接收端，丢弃事件 {}", event.kind());
        }
    }
}
