// ==========================================
// 教師員額控管系統 - API层错误类型
// ==========================================
// 职责: 将导入/仓储错误转换为对外可读的错误消息
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("导入失败: {0}")]
    ImportError(String),

    #[error("数据存取失败: {0}")]
    RepositoryError(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::RepositoryError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// ApiResponse - 写入类操作的统一回应
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    /// 仅领域更新时提供: 是否找到目标领域
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_found: Option<bool>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            domain_found: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            domain_found: None,
        }
    }

    pub fn with_domain_found(mut self, found: bool) -> Self {
        self.domain_found = Some(found);
        self
    }
}
