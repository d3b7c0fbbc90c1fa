// ==========================================
// 教師員額控管系統 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 坏单元格/无法归类的行不属于错误（分别视为 0 / 跳过）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xlsm/.xls/.ods/.csv/.pdf）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("工作表不存在: 索引 {index}（共 {available} 张）")]
    SheetNotFound { index: usize, available: usize },

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("PDF 解析失败: {0}")]
    PdfParseError(String),

    #[error("PDF 页面不存在: 第 {0} 页")]
    PdfPageOutOfRange(usize),

    // ===== 配置错误 =====
    #[error("版面配置错误: {0}")]
    LayoutConfigError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
