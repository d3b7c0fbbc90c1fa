// ==========================================
// 教師員額控管系統 - 引擎层
// ==========================================
// 职责: 员额汇总/盈缺计算、课程目录统计
// 红线: 引擎不做 I/O
// ==========================================

pub mod catalog_stats;
pub mod staffing_aggregator;

// 重导出核心引擎
pub use catalog_stats::{CatalogStatsEngine, DepartmentStats, DomainCount};
pub use staffing_aggregator::{StaffingAggregator, UpdateOutcome};
