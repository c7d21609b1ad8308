use thiserror::Error;

/// 测验状态存储错误类型
#[derive(Debug, Error)]
pub enum StoreError {
    /// 题库中不存在该题目
    #[error("题目不存在: {id}")]
    QuestionNotFound { id: String },

    /// 当前没有选中的题目，无法操作学生作答
    #[error("当前没有选中的题目，无法执行 {operation}")]
    NoCurrentQuestion { operation: &'static str },

    /// 快照序列化/反序列化失败
    #[error("快照解析失败: {source}")]
    Snapshot {
        #[source]
        source: serde_json::Error,
    },

    /// 题库 TOML 解析失败
    #[error("题库解析失败 ({path}): {source}")]
    BankParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 文件读取失败
    #[error("读取文件失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Snapshot { source: err }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::BankParse {
            path: String::new(), // TOML错误通常不包含路径信息
            source: err,
        }
    }
}

// ========== 便捷构造函数 ==========

impl StoreError {
    /// 创建题目不存在错误
    pub fn question_not_found(id: impl Into<String>) -> Self {
        StoreError::QuestionNotFound { id: id.into() }
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// 是否为前置条件不满足（未选中题目）
    pub fn is_precondition(&self) -> bool {
        matches!(self, StoreError::NoCurrentQuestion { .. })
    }
}

// ========== Result 类型别名 ==========

/// 存储操作结果类型
pub type AppResult<T> = Result<T, StoreError>;
