// ==========================================
// 教師員額控管系統 - 配置层
// ==========================================
// 职责: 静态对照表、试算表版面、系统设定
// 约束: 对照表为进程级只读常量
// ==========================================

pub mod settings;
pub mod sheet_layout;
pub mod tables;

// 重导出核心配置
pub use settings::AppSettings;
pub use sheet_layout::{DepartmentConfig, PeriodColumn, SheetLayout};
