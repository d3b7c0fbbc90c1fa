// ==========================================
// 教師員額控管系統 - 导入接口 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 外部协作者: 试算表单元格读取、PDF 表格几何抽取（黑盒）
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::grid::{CellValue, Grid};
use std::path::Path;

/// PDF 表格中的一行（单元格可能缺失）
pub type RawRow = Vec<Option<String>>;

/// PDF 页面中抽出的一张表格
pub type RawTable = Vec<RawRow>;

// ==========================================
// GridLoader Trait
// ==========================================
// 用途: 读取单张工作表为二维网格（阶段 0）
// 实现者: ExcelGridLoader, CsvGridLoader
pub trait GridLoader: Send + Sync {
    /// 读取指定工作表
    ///
    /// # 参数
    /// - file_path: 文件路径
    /// - sheet_index: 工作表索引（0 起算；CSV 忽略）
    ///
    /// # 返回
    /// - Ok(Grid): 保留绝对行列位置的网格
    /// - Err: 文件读取错误、格式错误、工作表不存在
    fn load_grid(&self, file_path: &Path, sheet_index: usize) -> ImportResult<Grid>;
}

// ==========================================
// PdfTableSource Trait
// ==========================================
// 用途: PDF 页面/表格几何抽取（黑盒）
// 实现者: TextLayoutTableSource；测试中以内存表格替代
pub trait PdfTableSource {
    /// 总页数
    fn page_count(&self) -> ImportResult<usize>;

    /// 抽取某一页（0 起算）上的全部表格，可为空
    fn extract_tables(&self, page_index: usize) -> ImportResult<Vec<RawTable>>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格清洗与数值强制转换
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 清洗文字（去首尾空白、去换行）；None → 空字符串
    fn clean_cell(&self, value: Option<&str>) -> String;

    /// 去除全部空白字符（用于关键字比对）
    fn compact_text(&self, value: &str) -> String;

    /// 是否为占位值（空白 / nan / None 等）
    fn is_placeholder(&self, value: &str) -> bool;

    /// 试算表节数强制转换
    ///
    /// # 规则
    /// - 数值 → 截尾取整；负数 → 0
    /// - 非数值 / 空白 → 0（从不报错）
    fn coerce_hours(&self, cell: &CellValue) -> u32;

    /// 文字 → 整数（先浮点后截尾）；无法解析返回 None
    fn parse_integer(&self, value: &str) -> Option<i64>;
}
