//! 教师端题目界面的数据绑定
//!
//! 只负责格式化文本并保存当前素材引用，不做任何渲染。

use tracing::debug;

use crate::models::QuizInfo;
use crate::store::{QuizEvent, QuizObserver, QuizStore};

/// 教师端题目视图
pub struct InstructorQuestionView {
    chapter_text: String,
    mission_text: String,
    quiz_info_text: String,
    student_amount_text: String,
    question_asset: Option<String>,
    on_next_state: Option<Box<dyn FnMut()>>,
}

impl InstructorQuestionView {
    /// 根据当前存储状态初始化各文本
    pub fn new(chapter: &str, mission: &str, store: &QuizStore) -> Self {
        let quiz_info = store.quiz_info().unwrap_or(QuizInfo::new(0, 0));
        Self {
            chapter_text: format_chapter(chapter),
            mission_text: format_mission(mission),
            quiz_info_text: format_quiz_info(quiz_info),
            student_amount_text: format_student_amount(0, store.student_amount()),
            question_asset: store.current_question().map(|q| q.asset_file.clone()),
            on_next_state: None,
        }
    }

    /// 注册"下一步"按钮的回调
    pub fn set_on_next_state(&mut self, callback: impl FnMut() + 'static) {
        self.on_next_state = Some(Box::new(callback));
    }

    /// 点击"下一步"
    pub fn press_next(&mut self) {
        if let Some(callback) = self.on_next_state.as_mut() {
            callback();
        }
    }

    pub fn chapter_text(&self) -> &str {
        &self.chapter_text
    }

    pub fn mission_text(&self) -> &str {
        &self.mission_text
    }

    pub fn quiz_info_text(&self) -> &str {
        &self.quiz_info_text
    }

    pub fn student_amount_text(&self) -> &str {
        &self.student_amount_text
    }

    pub fn question_asset(&self) -> Option<&str> {
        self.question_asset.as_deref()
    }
}

impl QuizObserver for InstructorQuestionView {
    fn on_event(&mut self, event: &QuizEvent, store: &QuizStore) {
        match event {
            QuizEvent::QuizInfoChanged { info } => {
                self.quiz_info_text = format_quiz_info(*info);
            }
            QuizEvent::QuestionChanged { question } => {
                self.question_asset = Some(question.asset_file.clone());
                self.student_amount_text = format_student_amount(0, store.student_amount());
            }
            QuizEvent::StudentAnswersChanged => {
                self.student_amount_text = format_student_amount(
                    store.answered_student_amount(),
                    store.student_amount(),
                );
            }
            QuizEvent::CustomDataChanged { data } => {
                debug!("收到自定义数据: {} 字节", data.len());
            }
            _ => {}
        }
    }
}

fn format_chapter(chapter: &str) -> String {
    format!("Chapter: {}", chapter)
}

fn format_mission(mission: &str) -> String {
    format!("Mission: {}", mission)
}

fn format_quiz_info(info: QuizInfo) -> String {
    info.to_string()
}

fn format_student_amount(answered: usize, total: usize) -> String {
    format!("{} / {}", answered, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuestionAssetType};
    use crate::store::shared;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_initial_texts() {
        let store = QuizStore::new();
        let view = InstructorQuestionView::new("3", "Animals", &store);

        assert_eq!(view.chapter_text(), "Chapter: 3");
        assert_eq!(view.mission_text(), "Mission: Animals");
        assert_eq!(view.quiz_info_text(), "0 / 0");
        assert_eq!(view.student_amount_text(), "0 / 0");
        assert_eq!(view.question_asset(), None);
    }

    #[test]
    fn test_view_follows_store_changes() {
        let mut store = QuizStore::new();
        store.replace_question_bank(vec![Question::new(
            "Q1",
            "cat.png",
            "cat",
            QuestionAssetType::Image,
        )]);
        let view = Rc::new(RefCell::new(InstructorQuestionView::new("1", "Pets", &store)));
        store.subscribe(shared(&view));

        store.set_quiz_info(QuizInfo::new(1, 10));
        store.select_question_by_id("Q1").unwrap();
        store.register_student_join("A").unwrap();
        store.register_student_join("B").unwrap();
        store.submit_student_answer("A", "cat").unwrap();

        let view = view.borrow();
        assert_eq!(view.quiz_info_text(), "1 / 10");
        assert_eq!(view.question_asset(), Some("cat.png"));
        assert_eq!(view.student_amount_text(), "1 / 2");
    }

    #[test]
    fn test_press_next_invokes_callback() {
        let store = QuizStore::new();
        let mut view = InstructorQuestionView::new("1", "Pets", &store);
        view.press_next();

        let pressed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pressed);
        view.set_on_next_state(move || counter.set(counter.get() + 1));
        view.press_next();
        view.press_next();

        assert_eq!(pressed.get(), 2);
    }
}
