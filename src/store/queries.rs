use indexmap::IndexMap;

use super::QuizStore;
use crate::models::StudentAnswer;

/// 派生统计，每次访问时重新计算
impl QuizStore {
    /// 当前题目的作答记录，未选题或无人加入时为空
    pub fn current_answers(&self) -> &[StudentAnswer] {
        self.current_question
            .as_ref()
            .and_then(|q| self.student_answers.get(&q.id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 指定题目的作答记录
    pub fn answers_for(&self, question_id: &str) -> &[StudentAnswer] {
        self.student_answers
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 某个学生在当前题目上的作答
    pub fn student_answer(&self, station_id: &str) -> Option<&StudentAnswer> {
        self.current_answers()
            .iter()
            .find(|a| a.station_id == station_id)
    }

    pub fn student_amount(&self) -> usize {
        self.current_answers().len()
    }

    pub fn answered_student_amount(&self) -> usize {
        self.current_answers()
            .iter()
            .filter(|a| a.is_answered())
            .count()
    }

    /// 答案 → 人数，按答案首次出现的顺序排列
    ///
    /// 未作答（空字符串）也计为一个键，因此各计数之和等于 `student_amount()`。
    pub fn answer_summary(&self) -> IndexMap<String, usize> {
        let mut summary = IndexMap::new();
        for answer in self.current_answers() {
            *summary.entry(answer.answer.clone()).or_insert(0) += 1;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuestionAssetType};

    fn store_with_question() -> QuizStore {
        let mut store = QuizStore::new();
        store.set_current_question(Question::new("Q1", "q1.png", "cat", QuestionAssetType::Image));
        store
    }

    #[test]
    fn test_amounts_without_current_question() {
        let store = QuizStore::new();
        assert_eq!(store.student_amount(), 0);
        assert_eq!(store.answered_student_amount(), 0);
        assert!(store.answer_summary().is_empty());
        assert!(store.student_answer("A").is_none());
    }

    #[test]
    fn test_answer_summary_counts_unanswered_as_empty_key() {
        let mut store = store_with_question();
        store.register_student_join("A").unwrap();
        store.register_student_join("B").unwrap();
        store.register_student_join("C").unwrap();
        store.submit_student_answer("B", "dog").unwrap();
        store.submit_student_answer("C", "dog").unwrap();

        let summary = store.answer_summary();
        let entries: Vec<(&str, usize)> = summary.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("", 1), ("dog", 2)]);

        assert_eq!(summary.values().sum::<usize>(), store.student_amount());
        assert_eq!(store.answered_student_amount(), 2);
    }

    #[test]
    fn test_answer_summary_keeps_first_occurrence_order() {
        let mut store = store_with_question();
        store.submit_student_answer("A", "wrong").unwrap();
        store.submit_student_answer("B", "cat").unwrap();
        store.submit_student_answer("C", "wrong").unwrap();

        let summary = store.answer_summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.get_index(0), Some((&"wrong".to_string(), &2)));
        assert_eq!(summary.get_index(1), Some((&"cat".to_string(), &1)));
    }

    #[test]
    fn test_answered_never_exceeds_total() {
        let mut store = store_with_question();
        for station in ["A", "B", "C", "D"] {
            store.register_student_join(station).unwrap();
            assert!(store.answered_student_amount() <= store.student_amount());
        }
        store.submit_student_answer("A", "cat").unwrap();
        store.submit_student_answer("A", "").unwrap();
        assert_eq!(store.answered_student_amount(), 0);
        assert_eq!(store.student_amount(), 4);
    }

    #[test]
    fn test_empty_station_id_and_empty_answer() {
        let mut store = store_with_question();
        store.register_student_join("").unwrap();
        store.submit_student_answer("B", "").unwrap();

        assert_eq!(store.student_amount(), 2);
        assert_eq!(store.answered_student_amount(), 0);
        assert_eq!(store.answer_summary().get(""), Some(&2));
    }

    #[test]
    fn test_student_answer_lookup() {
        let mut store = store_with_question();
        store.submit_student_answer("A", "cat").unwrap();
        assert_eq!(store.student_answer("A").unwrap().answer, "cat");
        assert_eq!(store.answers_for("Q1").len(), 1);
        assert!(store.answers_for("Q2").is_empty());
    }
}
