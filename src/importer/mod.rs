// ==========================================
// 教師員額控管系統 - 导入层
// ==========================================
// 职责: 外部课程资料 → 标准化课程模型
// 支持: Excel / CSV 试算表, PDF 课纲
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod domain_classifier;
pub mod error;
pub mod file_parser;
pub mod grid;
pub mod importer_trait;
pub mod pdf_extractor;
pub mod pdf_row_classifier;
pub mod sheet_extractor;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use domain_classifier::{classify, DomainClassifier};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvGridLoader, ExcelGridLoader, UniversalGridLoader};
pub use grid::{CellValue, Grid};
pub use pdf_extractor::{PdfCourseExtractor, PdfExtractionResult, RawTableInfo, TextLayoutTableSource};
pub use pdf_row_classifier::PdfRowClassifier;
pub use sheet_extractor::SheetCourseExtractor;

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, GridLoader, PdfTableSource, RawRow, RawTable};
