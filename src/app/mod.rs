// ==========================================
// 教師員額控管系統 - 应用层
// ==========================================
// 职责: 组装仓储与 API，供 CLI / 外部网页层使用
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_data_dir, AppState};
