// ==========================================
// 教師員額控管系統 - PDF 表格行判定器
// ==========================================
// 职责: 单行原始单元格 → 课程记录 或 噪声（标题/小计/标签）
// 判定顺序（严格按序）:
// 1. 清洗所有单元格
// 2. 首个 ≥2 字的单元格为课名候选；无则非课程
// 3. 候选含标题关键字 → 拒绝
// 4. 候选须含至少一个中日韩统一表意文字
// 5. 其余单元格转数值，仅保留 [0, 20]
// 6. 无合格数值 → 拒绝
// 7. 合计为 0 → 拒绝
// 8. 输出（领域/类别留空）
// ==========================================

use crate::config::tables::{PDF_HOURS_MAX, PDF_HOURS_MIN, PDF_TITLE_KEYWORDS};
use crate::domain::course::PdfCourseRecord;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;

const MIN_NAME_CHARS: usize = 2;

pub struct PdfRowClassifier {
    denylist: Vec<String>,
    data_cleaner: Box<dyn DataCleanerTrait>,
}

impl PdfRowClassifier {
    /// 以自定义关键字建立
    pub fn new<I, S>(denylist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            denylist: denylist.into_iter().map(Into::into).collect(),
            data_cleaner: Box::new(DataCleaner),
        }
    }

    pub fn denylist(&self) -> &[String] {
        &self.denylist
    }

    /// 判定单行
    pub fn classify_row(&self, raw_cells: &[Option<String>]) -> Option<PdfCourseRecord> {
        if raw_cells.is_empty() {
            return None;
        }

        // 1. 清洗
        let cells: Vec<String> = raw_cells
            .iter()
            .map(|c| self.data_cleaner.clean_cell(c.as_deref()))
            .collect();

        // 2. 课名候选
        let (name_index, name) = cells
            .iter()
            .enumerate()
            .find(|(_, c)| c.chars().count() >= MIN_NAME_CHARS)?;

        // 3. 标题/小计行
        if self.denylist.iter().any(|k| name.contains(k.as_str())) {
            return None;
        }

        // 4. 须含中文
        if !name.chars().any(is_cjk_ideograph) {
            return None;
        }

        // 5. 节数
        let hours: Vec<u32> = cells
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name_index)
            .filter_map(|(_, c)| self.data_cleaner.parse_integer(c))
            .filter(|n| (PDF_HOURS_MIN as i64..=PDF_HOURS_MAX as i64).contains(n))
            .map(|n| n as u32)
            .collect();

        // 6. 无节数
        if hours.is_empty() {
            return None;
        }

        // 7. 合计为 0
        if hours.iter().sum::<u32>() == 0 {
            return None;
        }

        // 8. 输出
        Some(PdfCourseRecord::new(name.clone(), hours))
    }
}

impl Default for PdfRowClassifier {
    fn default() -> Self {
        Self::new(PDF_TITLE_KEYWORDS.iter().copied())
    }
}

/// 中日韩统一表意文字（U+4E00..=U+9FFF）
fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}
