//! 测验状态存储
//!
//! 会话内唯一的数据源：题库、当前题目、学生作答、成绩与自定义数据。
//! 所有修改都经由这里的方法完成，修改后同步通知观察者。

use std::collections::HashMap;

use tracing::{debug, error, warn};

use crate::error::{AppResult, StoreError};
use crate::models::{PreTestResult, Question, QuizInfo, StudentAnswer};
use crate::store::events::{ObserverRegistry, QuizEvent, QuizObserver, SubscriptionId};

#[derive(Debug, Default)]
pub struct QuizStore {
    pub(crate) question_bank: HashMap<String, Question>,
    pub(crate) current_question: Option<Question>,
    pub(crate) quiz_info: Option<QuizInfo>,
    pub(crate) current_quiz_state: i32,
    pub(crate) correct_answer: Option<String>,
    /// 题目 id → 按加入顺序排列的作答记录，station_id 唯一
    pub(crate) student_answers: HashMap<String, Vec<StudentAnswer>>,
    pub(crate) student_pre_test_scores: HashMap<String, i32>,
    pub(crate) correct_answer_amount: i32,
    pub(crate) custom_data: Option<Vec<u8>>,
    pub(crate) pre_test_result: Option<PreTestResult>,
    observers: ObserverRegistry,
}

impl QuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 订阅 ==========

    /// 注册观察者，按注册顺序接收通知
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: QuizObserver + 'static,
    {
        self.observers.add(Box::new(observer))
    }

    /// 以闭包形式注册观察者
    pub fn on_change<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&QuizEvent, &QuizStore) + 'static,
    {
        self.subscribe(callback)
    }

    /// 取消订阅，返回该句柄是否仍处于注册状态
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// 同步派发事件
    ///
    /// 派发期间注册表被临时取出，观察者只拿到 `&self`。
    /// 回调 panic 时注册表也会在栈展开时放回。
    fn emit(&mut self, event: QuizEvent) {
        let observers = std::mem::take(&mut self.observers);
        let mut guard = DispatchGuard {
            store: self,
            observers,
        };
        guard.observers.dispatch(&event, &*guard.store);
    }

    // ========== 修改操作 ==========

    /// 整体替换题库
    ///
    /// 同时清空所有题目的作答记录。重复 id 以最后一个为准。不发出通知。
    pub fn replace_question_bank<I>(&mut self, questions: I)
    where
        I: IntoIterator<Item = Question>,
    {
        self.question_bank.clear();
        self.student_answers.clear();

        for question in questions {
            self.question_bank.insert(question.id.clone(), question);
        }

        debug!("题库已替换，共 {} 个题目", self.question_bank.len());
    }

    pub fn set_quiz_info(&mut self, info: QuizInfo) {
        self.quiz_info = Some(info);
        self.emit(QuizEvent::QuizInfoChanged { info });
    }

    /// 按 id 从题库中选择当前题目
    ///
    /// 未找到时记录错误并返回 [`StoreError::QuestionNotFound`]，状态不变，不发通知。
    pub fn select_question_by_id(&mut self, id: &str) -> AppResult<()> {
        let Some(question) = self.question_bank.get(id).cloned() else {
            error!("题目 id: {} 不存在", id);
            return Err(StoreError::question_not_found(id));
        };

        self.set_current_question(question);
        Ok(())
    }

    /// 直接设置当前题目，不经过题库查找
    pub fn set_current_question(&mut self, question: Question) {
        debug!("当前题目: {}", question);
        self.current_question = Some(question.clone());
        self.emit(QuizEvent::QuestionChanged { question });
    }

    /// 覆盖用于展示/判分的正确答案，与题目自带答案无关
    pub fn set_correct_answer(&mut self, answer: impl Into<String>) {
        let answer = answer.into();
        self.correct_answer = Some(answer.clone());
        self.emit(QuizEvent::AnswerChanged { answer });
    }

    /// 学生加入当前题目，登记一条空作答
    ///
    /// 已登记的学生不会被覆盖，返回 `Ok(false)`。不发出通知。
    pub fn register_student_join(&mut self, station_id: &str) -> AppResult<bool> {
        let question_id = self.require_current_question_id("register_student_join")?;
        let answers = self.student_answers.entry(question_id).or_default();

        if answers.iter().any(|a| a.station_id == station_id) {
            return Ok(false);
        }

        answers.push(StudentAnswer::joined(station_id));
        debug!("学生 {} 已加入，当前人数 {}", station_id, answers.len());
        Ok(true)
    }

    /// 提交或更新学生对当前题目的作答
    pub fn submit_student_answer(
        &mut self,
        station_id: &str,
        answer: impl Into<String>,
    ) -> AppResult<()> {
        let question_id = self.require_current_question_id("submit_student_answer")?;
        let answer = answer.into();
        let answers = self.student_answers.entry(question_id).or_default();

        match answers.iter_mut().find(|a| a.station_id == station_id) {
            Some(existing) => existing.answer = answer,
            None => answers.push(StudentAnswer {
                station_id: station_id.to_string(),
                answer,
            }),
        }

        self.emit(QuizEvent::StudentAnswersChanged);
        Ok(())
    }

    /// 整体替换前测成绩表，不发出通知
    pub fn set_student_pre_test_scores(&mut self, scores: HashMap<String, i32>) {
        self.student_pre_test_scores = scores;
    }

    /// 设置会话阶段
    ///
    /// 阶段码由外部定义，不做转换校验；`is_following` 原样转发给观察者。
    pub fn advance_quiz_state(&mut self, state: i32, is_following: bool) {
        debug!("测验阶段: {} -> {} (跟随: {})", self.current_quiz_state, state, is_following);
        self.current_quiz_state = state;
        self.emit(QuizEvent::QuizStateChanged {
            state,
            is_following,
        });
    }

    pub fn set_quiz_result(&mut self, correct_answer_amount: i32) {
        self.correct_answer_amount = correct_answer_amount;
        self.emit(QuizEvent::CorrectAnswerAmountChanged {
            amount: correct_answer_amount,
        });
    }

    pub fn set_pre_test_result(&mut self, result: PreTestResult) {
        self.pre_test_result = Some(result);
        self.emit(QuizEvent::PreTestResultChanged { result });
    }

    /// 设置透传的自定义数据
    pub fn set_custom_data(&mut self, data: Vec<u8>) {
        self.custom_data = Some(data.clone());
        self.emit(QuizEvent::CustomDataChanged { data });
    }

    fn require_current_question_id(&self, operation: &'static str) -> AppResult<String> {
        match &self.current_question {
            Some(question) => Ok(question.id.clone()),
            None => {
                warn!("⚠️ 当前没有选中的题目，忽略 {}", operation);
                Err(StoreError::NoCurrentQuestion { operation })
            }
        }
    }

    // ========== 只读访问 ==========

    pub fn question_bank(&self) -> &HashMap<String, Question> {
        &self.question_bank
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn quiz_info(&self) -> Option<QuizInfo> {
        self.quiz_info
    }

    pub fn current_quiz_state(&self) -> i32 {
        self.current_quiz_state
    }

    pub fn correct_answer(&self) -> Option<&str> {
        self.correct_answer.as_deref()
    }

    pub fn correct_answer_amount(&self) -> i32 {
        self.correct_answer_amount
    }

    pub fn pre_test_result(&self) -> Option<PreTestResult> {
        self.pre_test_result
    }

    pub fn custom_data(&self) -> Option<&[u8]> {
        self.custom_data.as_deref()
    }

    pub fn student_answers(&self) -> &HashMap<String, Vec<StudentAnswer>> {
        &self.student_answers
    }

    pub fn student_pre_test_scores(&self) -> &HashMap<String, i32> {
        &self.student_pre_test_scores
    }

    pub fn student_pre_test_score(&self, station_id: &str) -> Option<i32> {
        self.student_pre_test_scores.get(station_id).copied()
    }
}

/// 派发结束（包括 panic 展开）时把注册表放回存储
struct DispatchGuard<'a> {
    store: &'a mut QuizStore,
    observers: ObserverRegistry,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.store.observers = std::mem::take(&mut self.observers);
    }
}
