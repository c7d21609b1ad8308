//! # Quiz Session Store
//!
//! 课堂实时测验的客户端状态层
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/` - 题目、测验进度、学生作答、前测成绩等值类型
//! - `models/loaders` - 从 TOML 文件加载题库
//!
//! ### ② 状态存储（Store）
//! - `store/` - 会话内唯一的数据源
//! - `QuizStore` - 修改操作、派生统计、同步通知观察者
//! - `ChannelObserver` - 把通知转发到 tokio 广播通道
//!
//! ### ③ 视图绑定（Views）
//! - `views/` - 把存储状态格式化为界面文本
//!
//! 事件在调用线程上同步派发，修改操作返回时所有观察者已收到通知。
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;
pub mod views;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppResult, StoreError};
pub use models::{PreTestResult, Question, QuestionAssetType, QuizInfo, StudentAnswer};
pub use store::{ChannelObserver, QuizEvent, QuizEventKind, QuizObserver, QuizSnapshot, QuizStore, SubscriptionId};
pub use views::InstructorQuestionView;
