// ==========================================
// 教師員額控管系統 - 核心库
// ==========================================
// 职责: 课程节数解析（试算表 / PDF 课纲）+ 员额盈缺汇总
// 数据流: 原始来源 → 解析器 → 课程记录 → (落盘) → 汇总引擎 → 总览报表
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 试算表 / PDF 解析
pub mod importer;

// 引擎层 - 员额汇总
pub mod engine;

// 数据仓储层 - 文档读写
pub mod repository;

// 配置层 - 对照表与版面
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 边界操作
pub mod api;

// 应用层 - 组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CourseCatalogDocument, CourseRecord, DepartmentSchedule, DomainLabel, DomainStaffing,
    DomainSummary, DomainUpdate, PdfCourseRecord, PeriodHours, StaffingDocument,
    SubstituteTeacherRecord, SummaryReport, SummaryStatus, TeacherRecord,
};

// 解析器
pub use importer::{DomainClassifier, PdfCourseExtractor, PdfRowClassifier, SheetCourseExtractor};

// 引擎
pub use engine::{CatalogStatsEngine, StaffingAggregator, UpdateOutcome};

// API
pub use api::{CourseApi, SettingsApi, StaffingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "教師員額控管系統";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
