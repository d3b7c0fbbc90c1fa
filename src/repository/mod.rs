// ==========================================
// 教師員額控管系統 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 整份文档的读取/写入，屏蔽存储细节
// ==========================================

pub mod error;
pub mod json_store;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use json_store::{DocumentStore, JsonFileStore, COURSES_KEY, SETTINGS_KEY, TEACHERS_KEY};
