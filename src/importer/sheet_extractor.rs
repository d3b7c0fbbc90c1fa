// ==========================================
// 教師員額控管系統 - 试算表课程解析器
// ==========================================
// 职责: 固定版面工作表 → 各科别课程列表
// 流程（每个科别独立一轮）:
//   区段标题 → 课名 → 排除词 → 各学期节数 → 零节数过滤 → 领域判定
// ==========================================

use crate::config::sheet_layout::{DepartmentConfig, SheetLayout};
use crate::config::tables::EXCLUDED_COURSE_KEYWORDS;
use crate::domain::course::{CourseCatalogDocument, CourseRecord, DepartmentSchedule, PeriodHours};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::domain_classifier::DomainClassifier;
use crate::importer::error::ImportResult;
use crate::importer::grid::{CellValue, Grid};
use crate::importer::importer_trait::{DataCleaner as DataCleanerTrait, GridLoader};
use std::path::Path;
use tracing::{debug, info, instrument, trace};

// ==========================================
// SheetCourseExtractor - 试算表课程解析器
// ==========================================
// 红线: 无状态，相同输入必得相同输出
pub struct SheetCourseExtractor {
    layout: SheetLayout,
    data_cleaner: Box<dyn DataCleanerTrait>,
}

impl SheetCourseExtractor {
    pub fn new(layout: SheetLayout) -> Self {
        Self {
            layout,
            data_cleaner: Box::new(DataCleaner),
        }
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// 从文件解析课程目录
    #[instrument(skip(self, loader, file_path), fields(file = %file_path.as_ref().display()))]
    pub fn extract_file<P: AsRef<Path>>(
        &self,
        loader: &dyn GridLoader,
        file_path: P,
    ) -> ImportResult<CourseCatalogDocument> {
        let grid = loader.load_grid(file_path.as_ref(), self.layout.sheet_index)?;
        info!(rows = grid.row_count(), "工作表读取完成，开始解析课程");

        let departments = self.extract(&grid);
        Ok(CourseCatalogDocument::new(self.layout.school_year, departments))
    }

    /// 解析全部科别
    pub fn extract(&self, grid: &Grid) -> Vec<DepartmentSchedule> {
        self.layout
            .departments
            .iter()
            .map(|dept| self.extract_department(grid, dept))
            .collect()
    }

    /// 解析单一科别
    pub fn extract_department(&self, grid: &Grid, dept: &DepartmentConfig) -> DepartmentSchedule {
        let mut classifier = DomainClassifier::new();
        let mut courses = Vec::new();

        for row_idx in self.layout.data_start_row..grid.row_count() {
            // 1. 区段标题
            let header = self.cell_text(grid.cell(row_idx, self.layout.section_column));
            if !self.data_cleaner.is_placeholder(&header) {
                classifier.observe_header(&header);
            }

            // 2. 课程名称
            let name = self.cell_text(grid.cell(row_idx, self.layout.name_column));
            if self.data_cleaner.is_placeholder(&name) {
                continue;
            }

            // 3. 排除小计/总节数/团体活动等
            if self.is_excluded(&name) {
                trace!(row = row_idx, name = %name, "排除非课程行");
                continue;
            }

            // 4. 各学期节数
            let per_period_hours: PeriodHours = dept
                .columns
                .iter()
                .map(|pc| {
                    let hours = self.data_cleaner.coerce_hours(grid.cell(row_idx, pc.column));
                    (pc.period.clone(), hours)
                })
                .collect();

            // 5. 该科别无节数 → 非本科课程
            if per_period_hours.values().all(|h| *h == 0) {
                continue;
            }

            // 6. 领域判定
            let domain = classifier.classify(&name);
            courses.push(CourseRecord::new(domain, name, per_period_hours));
        }

        debug!(
            department = %dept.id,
            courses = courses.len(),
            "科别课程解析完成"
        );

        DepartmentSchedule {
            id: dept.id.clone(),
            name: dept.name.clone(),
            class_count: dept.class_count,
            courses,
        }
    }

    fn cell_text(&self, cell: &CellValue) -> String {
        match cell {
            CellValue::Empty => String::new(),
            other => self.data_cleaner.clean_cell(Some(&other.to_string())),
        }
    }

    fn is_excluded(&self, name: &str) -> bool {
        let compact = self.data_cleaner.compact_text(name);
        EXCLUDED_COURSE_KEYWORDS
            .iter()
            .any(|k| name.contains(k) || compact.contains(k))
    }
}

impl Default for SheetCourseExtractor {
    fn default() -> Self {
        Self::new(SheetLayout::default())
    }
}
