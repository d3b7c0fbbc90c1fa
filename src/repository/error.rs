// ==========================================
// 教師員額控管系統 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约束: 写入失败直接回报，不自动重试
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("文档读取失败 (key={key}): {message}")]
    ReadError { key: String, message: String },

    #[error("文档写入失败 (key={key}): {message}")]
    WriteError { key: String, message: String },

    #[error("文档序列化失败: {0}")]
    SerializationError(String),

    #[error("文档锁获取失败: {0}")]
    LockError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::SerializationError(err.to_string())
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
