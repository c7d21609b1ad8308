//! 测验状态存储层
//!
//! - `quiz_store` - 数据与修改操作
//! - `queries` - 派生统计（人数、答案分布）
//! - `events` - 变更事件与观察者
//! - `channel` - 事件转发到广播通道
//! - `snapshot` - 对外持久化的字段快照

pub mod channel;
pub mod events;
pub mod queries;
pub mod quiz_store;
pub mod snapshot;

pub use channel::ChannelObserver;
pub use events::{shared, QuizEvent, QuizEventKind, QuizObserver, SubscriptionId};
pub use quiz_store::QuizStore;
pub use snapshot::QuizSnapshot;
