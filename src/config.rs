/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库 TOML 文件路径
    pub question_bank_file: String,
    /// 事件广播通道容量
    pub event_channel_capacity: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// tracing 日志过滤规则
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_bank_file: "question_bank.toml".to_string(),
            event_channel_capacity: 32,
            verbose_logging: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            question_bank_file: std::env::var("QUESTION_BANK_FILE").unwrap_or(default.question_bank_file),
            event_channel_capacity: std::env::var("EVENT_CHANNEL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&capacity: &usize| capacity > 0)
                .unwrap_or(default.event_channel_capacity),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            log_filter: std::env::var("LOG_FILTER").unwrap_or(default.log_filter),
        }
    }
}
