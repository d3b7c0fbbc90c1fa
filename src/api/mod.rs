// ==========================================
// 教師員額控管系統 - API 层
// ==========================================
// 职责: 对外边界操作，返回结构化成功/失败结果
// 说明: 路由、会话与登入验证由外部网页层负责
// ==========================================

pub mod course_api;
pub mod error;
pub mod settings_api;
pub mod staffing_api;

// 重导出
pub use course_api::{CourseApi, CourseImportResponse};
pub use error::{ApiError, ApiResponse, ApiResult};
pub use settings_api::SettingsApi;
pub use staffing_api::StaffingApi;
