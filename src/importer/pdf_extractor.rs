// ==========================================
// 教師員額控管系統 - PDF 课纲解析器
// ==========================================
// 职责: 逐页抽取表格 → 逐行判定 → 累积课程与抽取统计
// 红线: 尽力而为，任何文档/表格读取错误只记录在结果中，不向上抛出
// ==========================================

use crate::domain::course::PdfCourseRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{PdfTableSource, RawRow, RawTable};
use crate::importer::pdf_row_classifier::PdfRowClassifier;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// 单张表格的抽取记录（供事后核对覆盖率）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTableInfo {
    /// 1 起算的页码
    pub page_number: usize,
    pub row_count: usize,
}

/// PDF 解析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfExtractionResult {
    pub success: bool,
    pub pages_count: usize,
    pub tables_found: usize,
    pub courses: Vec<PdfCourseRecord>,
    pub raw_tables: Vec<RawTableInfo>,
    pub error: Option<String>,
}

impl PdfExtractionResult {
    fn empty() -> Self {
        Self {
            success: true,
            pages_count: 0,
            tables_found: 0,
            courses: Vec::new(),
            raw_tables: Vec::new(),
            error: None,
        }
    }

    fn fail(&mut self, err: ImportError) {
        warn!(error = %err, "PDF 解析中止，返回已累积的部分结果");
        self.success = false;
        self.error = Some(err.to_string());
    }
}

// ==========================================
// PdfCourseExtractor - PDF 课纲解析器
// ==========================================
pub struct PdfCourseExtractor {
    row_classifier: PdfRowClassifier,
}

impl PdfCourseExtractor {
    pub fn new(row_classifier: PdfRowClassifier) -> Self {
        Self { row_classifier }
    }

    /// 从文件解析（打开失败同样记录在结果中）
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub fn extract_file<P: AsRef<Path>>(&self, file_path: P) -> PdfExtractionResult {
        match TextLayoutTableSource::open(file_path.as_ref()) {
            Ok(source) => self.extract(&source),
            Err(e) => {
                let mut result = PdfExtractionResult::empty();
                result.fail(e);
                result
            }
        }
    }

    /// 解析整份文档
    pub fn extract(&self, source: &dyn PdfTableSource) -> PdfExtractionResult {
        let mut result = PdfExtractionResult::empty();

        if let Err(e) = self.extract_into(source, &mut result) {
            result.fail(e);
        }

        info!(
            success = result.success,
            pages = result.pages_count,
            tables = result.tables_found,
            courses = result.courses.len(),
            "PDF 解析完成"
        );
        result
    }

    fn extract_into(
        &self,
        source: &dyn PdfTableSource,
        result: &mut PdfExtractionResult,
    ) -> ImportResult<()> {
        result.pages_count = source.page_count()?;

        for page_index in 0..result.pages_count {
            let tables = source.extract_tables(page_index)?;
            result.tables_found += tables.len();

            for table in &tables {
                let before = result.courses.len();
                result
                    .courses
                    .extend(table.iter().filter_map(|row| self.row_classifier.classify_row(row)));

                result.raw_tables.push(RawTableInfo {
                    page_number: page_index + 1,
                    row_count: table.len(),
                });

                debug!(
                    page = page_index + 1,
                    rows = table.len(),
                    courses = result.courses.len() - before,
                    "表格处理完成"
                );
            }
        }
        Ok(())
    }
}

impl Default for PdfCourseExtractor {
    fn default() -> Self {
        Self::new(PdfRowClassifier::default())
    }
}

// ==========================================
// TextLayoutTableSource - 基于文字层的表格来源
// ==========================================
// 以 pdf-extract 取得每页文字；每页视为一张表格，
// 每个非空文字行为一行，连续两个以上空白（或 Tab）为栏位分隔
pub struct TextLayoutTableSource {
    pages: Vec<RawTable>,
}

impl TextLayoutTableSource {
    pub fn open(path: &Path) -> ImportResult<Self> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(pdf_bytes: &[u8]) -> ImportResult<Self> {
        // pdf-extract 遇到部分损坏结构会 panic，此处收敛为解析错误
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        }))
        .map_err(|payload| {
            ImportError::PdfParseError(format!("文字层无法解读: {}", panic_message(payload.as_ref())))
        })?;
        let page_texts = extracted.map_err(|e| ImportError::PdfParseError(e.to_string()))?;

        Ok(Self::from_page_texts(&page_texts))
    }

    pub fn from_page_texts<S: AsRef<str>>(page_texts: &[S]) -> Self {
        let pages = page_texts
            .iter()
            .map(|text| {
                text.as_ref()
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(split_line_cells)
                    .collect()
            })
            .collect();
        Self { pages }
    }
}

impl PdfTableSource for TextLayoutTableSource {
    fn page_count(&self) -> ImportResult<usize> {
        Ok(self.pages.len())
    }

    fn extract_tables(&self, page_index: usize) -> ImportResult<Vec<RawTable>> {
        let page = self
            .pages
            .get(page_index)
            .ok_or(ImportError::PdfPageOutOfRange(page_index + 1))?;

        if page.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![page.clone()])
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "未知错误".to_string()
    }
}

/// 按连续空白切分栏位
fn split_line_cells(line: &str) -> RawRow {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut pending_spaces = 0usize;

    for c in line.trim().chars() {
        if c == '\t' {
            pending_spaces = 2;
        } else if c.is_whitespace() {
            pending_spaces += 1;
        } else {
            if pending_spaces >= 2 && !current.is_empty() {
                cells.push(Some(std::mem::take(&mut current)));
            } else if pending_spaces == 1 {
                current.push(' ');
            }
            pending_spaces = 0;
            current.push(c);
        }
    }
    if !current.is_empty() {
        cells.push(Some(current));
    }
    cells
}
