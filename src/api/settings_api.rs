// ==========================================
// 教師員額控管系統 - 系统设定API
// ==========================================
// 红线: 对外读取不得包含 admin_password
// ==========================================

use crate::api::error::ApiResult;
use crate::config::settings::AppSettings;
use crate::repository::{DocumentStore, SETTINGS_KEY};
use serde_json::Value;
use std::sync::Arc;

pub struct SettingsApi<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> SettingsApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 对外可见的设定
    pub fn get_public_settings(&self) -> ApiResult<Value> {
        let settings: AppSettings = self.store.load(SETTINGS_KEY)?;
        Ok(settings.public_view())
    }

    /// 设定中的学年度（供前端预设）
    pub fn school_year(&self) -> ApiResult<Option<i32>> {
        let settings: AppSettings = self.store.load(SETTINGS_KEY)?;
        Ok(settings.school_year)
    }
}
