// ==========================================
// 教師員額控管系統 - 课程API
// ==========================================
// 职责: 试算表课程导入（整批替换 courses.json）、PDF 课纲解析、目录读写
// ==========================================

use crate::api::error::{ApiError, ApiResponse, ApiResult};
use crate::config::sheet_layout::SheetLayout;
use crate::domain::course::CourseCatalogDocument;
use crate::engine::catalog_stats::{CatalogStatsEngine, DepartmentStats};
use crate::importer::file_parser::UniversalGridLoader;
use crate::importer::pdf_extractor::{PdfCourseExtractor, PdfExtractionResult};
use crate::importer::sheet_extractor::SheetCourseExtractor;
use crate::repository::{DocumentStore, COURSES_KEY};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{error, info, instrument};

/// 试算表导入响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseImportResponse {
    pub school_year: i32,
    /// 课程总数
    pub course_count: usize,
    /// 各科别统计
    pub departments: Vec<DepartmentStats>,
    /// 导入耗时（毫秒）
    pub elapsed_ms: i64,
}

/// 课程API
pub struct CourseApi<S: DocumentStore> {
    store: Arc<S>,
    pdf_extractor: PdfCourseExtractor,
    write_lock: Mutex<()>,
}

impl<S: DocumentStore> CourseApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            pdf_extractor: PdfCourseExtractor::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// 读取课程目录
    pub fn get_catalog(&self) -> ApiResult<CourseCatalogDocument> {
        Ok(self.store.load(COURSES_KEY)?)
    }

    /// 解析试算表并整批替换课程目录
    ///
    /// # 参数
    /// - file_path: .xlsx/.xls/.ods/.csv
    /// - layout: 版面配置（None 使用内建配置）
    #[instrument(skip(self, file_path, layout), fields(file = %file_path.as_ref().display()))]
    pub fn import_spreadsheet<P: AsRef<Path>>(
        &self,
        file_path: P,
        layout: Option<SheetLayout>,
    ) -> ApiResult<CourseImportResponse> {
        let started = Instant::now();
        let extractor = SheetCourseExtractor::new(layout.unwrap_or_default());

        let mut catalog = extractor.extract_file(&UniversalGridLoader, file_path)?;
        catalog.last_updated = Some(Local::now().date_naive());

        let departments = CatalogStatsEngine::compute(&catalog);
        {
            let _guard = self
                .write_lock
                .lock()
                .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
            self.store.save(COURSES_KEY, &catalog)?;
        }

        for dept in &departments {
            info!(
                department = %dept.name,
                courses = dept.course_count,
                total_hours = dept.total_hours,
                "科别课程已导入"
            );
        }

        Ok(CourseImportResponse {
            school_year: catalog.school_year,
            course_count: catalog.course_count(),
            departments,
            elapsed_ms: started.elapsed().as_millis() as i64,
        })
    }

    /// 解析 PDF 课纲（不落盘，领域留待人工判定）
    pub fn parse_curriculum_pdf<P: AsRef<Path>>(&self, file_path: P) -> PdfExtractionResult {
        self.pdf_extractor.extract_file(file_path)
    }

    /// 整份替换课程目录（total_hours 重新派生）
    pub fn replace_catalog(&self, mut catalog: CourseCatalogDocument) -> ApiResponse {
        let _guard = match self.write_lock.lock() {
            Ok(guard) => guard,
            Err(e) => return ApiResponse::fail(format!("锁获取失败: {}", e)),
        };

        for course in catalog
            .departments
            .iter_mut()
            .flat_map(|d| d.courses.iter_mut())
        {
            course.recompute_total();
        }
        catalog.last_updated = Some(Local::now().date_naive());

        match self.store.save(COURSES_KEY, &catalog) {
            Ok(()) => ApiResponse::ok("儲存成功"),
            Err(e) => {
                error!(error = %e, "课程目录写入失败");
                ApiResponse::fail("儲存失敗")
            }
        }
    }

    /// 各科别统计
    pub fn get_catalog_stats(&self) -> ApiResult<Vec<DepartmentStats>> {
        let catalog = self.get_catalog()?;
        Ok(CatalogStatsEngine::compute(&catalog))
    }
}
