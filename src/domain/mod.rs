// ==========================================
// 教師員額控管系統 - 领域模型层
// ==========================================
// 职责: 定义课程、员额、总览报表等实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod course;
pub mod staffing;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use course::{CourseCatalogDocument, CourseRecord, DepartmentSchedule, PdfCourseRecord, PeriodHours};
pub use staffing::{
    DomainStaffing, DomainUpdate, StaffingDocument, SubstituteTeacherRecord, TeacherRecord,
};
pub use summary::{DomainSummary, SummaryReport};
pub use types::{DomainLabel, SummaryStatus};
