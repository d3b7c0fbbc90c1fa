// ==========================================
// 教師員額控管系統 - 应用状态
// ==========================================
// 职责: 管理资料目录与各 API 实例
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::{CourseApi, SettingsApi, StaffingApi};
use crate::repository::JsonFileStore;

/// 应用状态
///
/// 同一资料目录的所有 API 共享一个文档仓储
pub struct AppState {
    /// 资料目录
    pub data_dir: PathBuf,

    /// 课程API
    pub course_api: Arc<CourseApi<JsonFileStore>>,

    /// 员额API
    pub staffing_api: Arc<StaffingApi<JsonFileStore>>,

    /// 系统设定API
    pub settings_api: Arc<SettingsApi<JsonFileStore>>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - data_dir: 存放 courses.json / teachers.json / settings.json 的目录
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        let store = Arc::new(JsonFileStore::new(&data_dir));

        tracing::info!(data_dir = %data_dir.display(), "初始化应用状态");

        Self {
            course_api: Arc::new(CourseApi::new(store.clone())),
            staffing_api: Arc::new(StaffingApi::new(store.clone())),
            settings_api: Arc::new(SettingsApi::new(store)),
            data_dir,
        }
    }
}

/// 默认资料目录
///
/// 优先级: 环境变量 TEACHER_QUOTA_DATA_DIR → 用户数据目录 → ./data
pub fn get_default_data_dir() -> PathBuf {
    // 允许通过环境变量显式指定（便于调试/测试/CI）
    if let Ok(path) = std::env::var("TEACHER_QUOTA_DATA_DIR") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("teacher-quota"),
        None => PathBuf::from("./data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::staffing::{DomainStaffing, DomainUpdate, StaffingDocument, TeacherRecord};
    use tempfile::tempdir;

    #[test]
    fn test_app_state_shares_store() {
        let dir = tempdir().unwrap();
        let state = AppState::new(dir.path());

        let mut doc = StaffingDocument::default();
        doc.domains.push(DomainStaffing::new("english", "英文"));
        assert!(state.staffing_api.replace_staffing(doc).success);

        let update = DomainUpdate {
            formal_teachers: Some(vec![TeacherRecord::new("甲", 16, false)]),
            ..Default::default()
        };
        let response = state.staffing_api.update_domain("english", update);
        assert!(response.success);

        let summary = state.staffing_api.get_summary().unwrap();
        assert_eq!(summary.total_base, 16);
        assert!(dir.path().join("teachers.json").exists());
    }
}
