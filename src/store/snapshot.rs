//! 对外持久化/传输的字段快照
//!
//! 只包含自定义数据、当前题目、测验进度、正确答案和会话阶段。
//! 题库、作答记录和统计不在快照内，恢复后需另行同步。

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::QuizStore;
use crate::error::AppResult;
use crate::models::{Question, QuizInfo};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    /// 以 base64 字符串存储
    #[serde(default, with = "base64_bytes")]
    pub custom_data: Option<Vec<u8>>,
    #[serde(default)]
    pub current_question: Option<Question>,
    #[serde(default)]
    pub quiz_info: Option<QuizInfo>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub current_quiz_state: i32,
}

// 自定义数据按 base64 字符串序列化
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match data {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

impl QuizSnapshot {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl QuizStore {
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            custom_data: self.custom_data.clone(),
            current_question: self.current_question.clone(),
            quiz_info: self.quiz_info,
            correct_answer: self.correct_answer.clone(),
            current_quiz_state: self.current_quiz_state,
        }
    }

    /// 从快照恢复字段
    ///
    /// 不发出通知，也不触碰题库和作答记录。
    pub fn restore(&mut self, snapshot: QuizSnapshot) {
        debug!(
            "从快照恢复: 题目 {:?}, 阶段 {}",
            snapshot.current_question.as_ref().map(|q| q.id.as_str()),
            snapshot.current_quiz_state
        );

        self.custom_data = snapshot.custom_data;
        self.current_question = snapshot.current_question;
        self.quiz_info = snapshot.quiz_info;
        self.correct_answer = snapshot.correct_answer;
        self.current_quiz_state = snapshot.current_quiz_state;
    }
}
