//! 变更通知
//!
//! 每个字段变更对应一种 [`QuizEvent`]，同步、按订阅顺序派发给所有观察者。
//! 事件只携带新值，聚合统计需要观察者通过 `&QuizStore` 自行查询。

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::models::{PreTestResult, Question, QuizInfo};
use crate::store::QuizStore;

/// 测验状态变更事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizEvent {
    CustomDataChanged { data: Vec<u8> },
    QuizInfoChanged { info: QuizInfo },
    QuizStateChanged { state: i32, is_following: bool },
    QuestionChanged { question: Question },
    AnswerChanged { answer: String },
    /// 会话级信号，不区分具体学生
    StudentAnswersChanged,
    CorrectAnswerAmountChanged { amount: i32 },
    PreTestResultChanged { result: PreTestResult },
}

/// 事件种类（不含数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizEventKind {
    CustomData,
    QuizInfo,
    QuizState,
    Question,
    Answer,
    StudentAnswers,
    CorrectAnswerAmount,
    PreTestResult,
}

impl QuizEvent {
    pub fn kind(&self) -> QuizEventKind {
        match self {
            QuizEvent::CustomDataChanged { .. } => QuizEventKind::CustomData,
            QuizEvent::QuizInfoChanged { .. } => QuizEventKind::QuizInfo,
            QuizEvent::QuizStateChanged { .. } => QuizEventKind::QuizState,
            QuizEvent::QuestionChanged { .. } => QuizEventKind::Question,
            QuizEvent::AnswerChanged { .. } => QuizEventKind::Answer,
            QuizEvent::StudentAnswersChanged => QuizEventKind::StudentAnswers,
            QuizEvent::CorrectAnswerAmountChanged { .. } => QuizEventKind::CorrectAnswerAmount,
            QuizEvent::PreTestResultChanged { .. } => QuizEventKind::PreTestResult,
        }
    }
}

impl fmt::Display for QuizEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizEventKind::CustomData => "custom_data",
            QuizEventKind::QuizInfo => "quiz_info",
            QuizEventKind::QuizState => "quiz_state",
            QuizEventKind::Question => "question",
            QuizEventKind::Answer => "answer",
            QuizEventKind::StudentAnswers => "student_answers",
            QuizEventKind::CorrectAnswerAmount => "correct_answer_amount",
            QuizEventKind::PreTestResult => "pre_test_result",
        };
        f.write_str(name)
    }
}

/// 观察者
///
/// 回调期间只能只读访问存储，无法在回调中再次修改存储。
pub trait QuizObserver {
    fn on_event(&mut self, event: &QuizEvent, store: &QuizStore);
}

impl<F> QuizObserver for F
where
    F: FnMut(&QuizEvent, &QuizStore),
{
    fn on_event(&mut self, event: &QuizEvent, store: &QuizStore) {
        self(event, store)
    }
}

/// 把共享的观察者包装成可注册的回调，调用方保留句柄以便读取其状态
pub fn shared<T>(observer: &Rc<RefCell<T>>) -> impl FnMut(&QuizEvent, &QuizStore) + 'static
where
    T: QuizObserver + 'static,
{
    let observer = Rc::clone(observer);
    move |event: &QuizEvent, store: &QuizStore| observer.borrow_mut().on_event(event, store)
}

/// 订阅句柄，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// 观察者注册表，保持订阅顺序
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    entries: Vec<(SubscriptionId, Box<dyn QuizObserver>)>,
    next_id: u64,
}

impl ObserverRegistry {
    pub(crate) fn add(&mut self, observer: Box<dyn QuizObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn dispatch(&mut self, event: &QuizEvent, store: &QuizStore) {
        for (_, observer) in self.entries.iter_mut() {
            observer.on_event(event, store);
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
