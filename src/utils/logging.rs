/// 日志工具模块
///
/// 提供日志初始化和会话统计输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::store::QuizStore;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先，否则使用传入的过滤规则。重复调用不会报错。
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

/// 记录题库加载信息
///
/// # 参数
/// - `path`: 题库文件路径
/// - `total`: 题目数量
pub fn log_bank_loaded(path: &str, total: usize) {
    info!("{}", "=".repeat(60));
    info!("📚 题库已加载: {}", path);
    info!("📊 题目数量: {}", total);
    info!("{}", "=".repeat(60));
}

/// 打印当前题目的作答统计
pub fn log_session_summary(store: &QuizStore) {
    info!("\n{}", "=".repeat(60));
    info!("📊 当前题目作答统计");
    info!(
        "统计时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));

    match store.current_question() {
        Some(question) => info!("当前题目: {}", question.id),
        None => info!("当前题目: 未选择"),
    }
    info!(
        "✅ 已作答: {}/{}",
        store.answered_student_amount(),
        store.student_amount()
    );
    for (answer, count) in store.answer_summary() {
        let label = if answer.is_empty() {
            "(未作答)".to_string()
        } else {
            truncate_text(&answer, 40)
        };
        info!("  {} → {}", label, count);
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("cat", 5), "cat");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        // 按字符而不是字节截断
        assert_eq!(truncate_text("北京是中国的首都", 2), "北京...");
    }
}
