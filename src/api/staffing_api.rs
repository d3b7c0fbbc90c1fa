// ==========================================
// 教師員額控管系統 - 员额API
// ==========================================
// 职责: 员额文档读取、单一领域更新、整份替换、节数总览
// 并发: 同一文档的读-改-写以互斥锁串行化
// ==========================================

use crate::api::error::{ApiError, ApiResponse, ApiResult};
use crate::domain::staffing::{DomainUpdate, StaffingDocument};
use crate::domain::summary::SummaryReport;
use crate::engine::staffing_aggregator::{StaffingAggregator, UpdateOutcome};
use crate::repository::{DocumentStore, TEACHERS_KEY};
use chrono::Local;
use std::sync::{Arc, Mutex};
use tracing::{error, info, instrument};

/// 员额API
pub struct StaffingApi<S: DocumentStore> {
    store: Arc<S>,
    aggregator: StaffingAggregator,
    write_lock: Mutex<()>,
}

impl<S: DocumentStore> StaffingApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            aggregator: StaffingAggregator::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// 读取员额文档
    pub fn get_staffing(&self) -> ApiResult<StaffingDocument> {
        Ok(self.store.load(TEACHERS_KEY)?)
    }

    /// 更新单一领域
    ///
    /// # 返回
    /// - success=false: 仅在锁获取或读写失败时
    /// - domain_found=false: 找不到领域，文档未变更、未写入
    #[instrument(skip(self, update))]
    pub fn update_domain(&self, domain_id: &str, update: DomainUpdate) -> ApiResponse {
        let _guard = match self.write_lock.lock() {
            Ok(guard) => guard,
            Err(e) => return ApiResponse::fail(format!("锁获取失败: {}", e)),
        };

        let mut document: StaffingDocument = match self.store.load(TEACHERS_KEY) {
            Ok(doc) => doc,
            Err(e) => {
                error!(error = %e, "员额文档读取失败");
                return ApiResponse::fail("更新失敗");
            }
        };

        let today = Local::now().date_naive();
        match self
            .aggregator
            .apply_domain_update(&mut document, domain_id, update, today)
        {
            UpdateOutcome::DomainNotFound => {
                ApiResponse::ok(format!("找不到領域 {}，未變更", domain_id)).with_domain_found(false)
            }
            UpdateOutcome::Applied => match self.store.save(TEACHERS_KEY, &document) {
                Ok(()) => {
                    info!(domain_id = %domain_id, "领域更新已保存");
                    ApiResponse::ok("更新成功").with_domain_found(true)
                }
                Err(e) => {
                    error!(domain_id = %domain_id, error = %e, "员额文档写入失败");
                    ApiResponse::fail("更新失敗").with_domain_found(true)
                }
            },
        }
    }

    /// 以 JSON 形式的部分更新请求更新领域
    pub fn update_domain_json(
        &self,
        domain_id: &str,
        payload: serde_json::Value,
    ) -> ApiResult<ApiResponse> {
        let update: DomainUpdate = serde_json::from_value(payload)
            .map_err(|e| ApiError::InvalidInput(format!("更新内容格式错误: {}", e)))?;
        Ok(self.update_domain(domain_id, update))
    }

    /// 整份替换员额文档（派生字段重算后写入）
    pub fn replace_staffing(&self, mut document: StaffingDocument) -> ApiResponse {
        let _guard = match self.write_lock.lock() {
            Ok(guard) => guard,
            Err(e) => return ApiResponse::fail(format!("锁获取失败: {}", e)),
        };

        self.aggregator.recompute_all(&mut document);
        document.last_updated = Some(Local::now().date_naive());

        match self.store.save(TEACHERS_KEY, &document) {
            Ok(()) => ApiResponse::ok("儲存成功"),
            Err(e) => {
                error!(error = %e, "员额文档写入失败");
                ApiResponse::fail("儲存失敗")
            }
        }
    }

    /// 节数总览
    pub fn get_summary(&self) -> ApiResult<SummaryReport> {
        let document: StaffingDocument = self.store.load(TEACHERS_KEY)?;
        Ok(self.aggregator.compute_summary(&document))
    }
}
