//! 会话相关的值类型：测验进度、学生作答、前测成绩

use serde::{Deserialize, Serialize};

/// 测验进度信息，整体替换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizInfo {
    /// 当前题号（从1开始）
    pub current_quiz_number: u32,
    /// 本次测验题目总数
    pub question_amount: u32,
}

impl QuizInfo {
    pub fn new(current_quiz_number: u32, question_amount: u32) -> Self {
        Self {
            current_quiz_number,
            question_amount,
        }
    }

    /// 由 usize 计数构造，超出 u32 范围时报错而不是截断
    pub fn from_counts(
        current_quiz_number: usize,
        question_amount: usize,
    ) -> Result<Self, std::num::TryFromIntError> {
        Ok(Self::new(
            u32::try_from(current_quiz_number)?,
            u32::try_from(question_amount)?,
        ))
    }
}

impl std::fmt::Display for QuizInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.current_quiz_number, self.question_amount)
    }
}

/// 单个学生（终端）对某题的作答
///
/// `answer` 为空字符串表示已加入但尚未作答。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAnswer {
    pub station_id: String,
    pub answer: String,
}

impl StudentAnswer {
    /// 刚加入、尚未作答的记录
    pub fn joined(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            answer: String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }
}

/// 前测成绩
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreTestResult {
    pub has_score: bool,
    pub score: i32,
    pub full_score: i32,
}

impl PreTestResult {
    pub fn new(has_score: bool, score: i32, full_score: i32) -> Self {
        Self {
            has_score,
            score,
            full_score,
        }
    }
}
