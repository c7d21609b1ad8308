use serde::{Deserialize, Serialize};

/// 题目素材类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionAssetType {
    /// 图片
    Image,
    /// 视频
    Video,
}

impl QuestionAssetType {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionAssetType::Image => "IMAGE",
            QuestionAssetType::Video => "VIDEO",
        }
    }

    /// 从名称解析素材类型（忽略大小写）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IMAGE" => Some(QuestionAssetType::Image),
            "VIDEO" => Some(QuestionAssetType::Video),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionAssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 题目
///
/// 构造后不再修改；同一 `id` 的新题目会整体覆盖题库中的旧值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// 题目素材文件
    pub asset_file: String,
    /// 题目自带的标准答案
    pub answer: String,
    pub asset_type: QuestionAssetType,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        asset_file: impl Into<String>,
        answer: impl Into<String>,
        asset_type: QuestionAssetType,
    ) -> Self {
        Self {
            id: id.into(),
            asset_file: asset_file.into(),
            answer: answer.into(),
            asset_type,
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}: {}]", self.id, self.asset_type, self.asset_file)
    }
}
