use anyhow::{Context, Result};
use quiz_session_store::models::load_question_bank;
use quiz_session_store::utils::logging;
use quiz_session_store::{ChannelObserver, Config, QuizEvent, QuizInfo, QuizStore};
use std::path::Path;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(&config.log_filter);

    let mut store = QuizStore::new();

    let verbose = config.verbose_logging;
    store.on_change(move |event, store| {
        info!("🔔 {} (已作答 {}/{})", event.kind(), store.answered_student_amount(), store.student_amount());
        if verbose {
            info!("   {:?}", event);
        }
    });

    let (channel, mut rx) = ChannelObserver::new(config.event_channel_capacity);
    store.subscribe(channel);

    let bank_path = Path::new(&config.question_bank_file);
    if !bank_path.exists() {
        warn!("⚠️ 题库文件不存在: {}，程序结束", config.question_bank_file);
        return Ok(());
    }

    let questions = load_question_bank(bank_path)
        .await
        .with_context(|| format!("无法加载题库: {}", config.question_bank_file))?;
    let total = questions.len();
    let first_id = questions.first().map(|q| q.id.clone());

    store.replace_question_bank(questions);
    logging::log_bank_loaded(&config.question_bank_file, store.question_bank().len());
    if store.question_bank().len() != total {
        warn!("⚠️ 题库中有 {} 个重复 id 被覆盖", total - store.question_bank().len());
    }

    if let Some(id) = first_id {
        let info = QuizInfo::from_counts(1, store.question_bank().len())
            .context("题目数量超出 u32 范围")?;
        store.set_quiz_info(info);
        store.select_question_by_id(&id)?;
    }

    while let Ok(event) = rx.try_recv() {
        if let QuizEvent::QuestionChanged { question } = event {
            info!("📄 当前题目素材: {}", question.asset_file);
        }
    }

    logging::log_session_summary(&store);

    Ok(())
}
