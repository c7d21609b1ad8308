use crate::error::{AppResult, StoreError};
use crate::models::question::Question;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 题库文件结构：若干 `[[questions]]` 表
#[derive(Debug, Deserialize)]
struct QuestionBankFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// 从 TOML 文本解析题库，保留文件中的顺序（含重复 id）
pub fn parse_question_bank(content: &str) -> AppResult<Vec<Question>> {
    let bank: QuestionBankFile = toml::from_str(content)?;
    Ok(bank.questions)
}

/// 从 TOML 文件加载题库
pub async fn load_question_bank(path: &Path) -> AppResult<Vec<Question>> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::file_read_failed(&path_str, e))?;

    let questions = toml::from_str::<QuestionBankFile>(&content)
        .map_err(|source| StoreError::BankParse {
            path: path_str.clone(),
            source,
        })?
        .questions;

    tracing::info!("成功加载 {} 个题目: {}", questions.len(), path_str);

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionAssetType;

    const BANK: &str = r#"
[[questions]]
id = "Q1"
asset_file = "cat.png"
answer = "cat"
asset_type = "IMAGE"

[[questions]]
id = "Q2"
asset_file = "dog.mp4"
answer = "dog"
asset_type = "VIDEO"
"#;

    #[test]
    fn test_parse_question_bank() {
        let questions = parse_question_bank(BANK).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "Q1");
        assert_eq!(questions[1].asset_type, QuestionAssetType::Video);
    }

    #[test]
    fn test_parse_empty_bank() {
        assert!(parse_question_bank("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_asset_type() {
        let content = r#"
[[questions]]
id = "Q1"
asset_file = "cat.wav"
answer = "cat"
asset_type = "AUDIO"
"#;
        let err = parse_question_bank(content).unwrap_err();
        assert!(matches!(err, StoreError::BankParse { .. }));
    }

    #[tokio::test]
    async fn test_load_question_bank_from_file() {
        let path = std::env::temp_dir().join(format!(
            "quiz_bank_{}_{}.toml",
            std::process::id(),
            "loader"
        ));
        std::fs::write(&path, BANK).unwrap();

        let questions = load_question_bank(&path).await.unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].answer, "cat");
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("quiz_bank_does_not_exist.toml");
        let err = tokio_test::block_on(load_question_bank(&path)).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
