// ==========================================
// 教師員額控管系統 - 工作表读取器实现
// ==========================================
// 职责: 文件 → Grid（阶段 0: 文件读取）
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 约束: 保留绝对行列位置（栏位配置以绝对索引表示）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::grid::{CellValue, Grid};
use crate::importer::importer_trait::GridLoader;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Loader 实现
// ==========================================
pub struct CsvGridLoader;

impl GridLoader for CsvGridLoader {
    fn load_grid(&self, file_path: &Path, _sheet_index: usize) -> ImportResult<Grid> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = extension_of(path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头也属于网格，由 data_start_row 跳过
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row = record
                .iter()
                .map(|value| {
                    if value.trim().is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::text(value)
                    }
                })
                .collect();
            rows.push(row);
        }

        debug!(rows = rows.len(), "CSV 读取完成");
        Ok(Grid::new(rows))
    }
}

// ==========================================
// Excel Loader 实现
// ==========================================
pub struct ExcelGridLoader;

impl GridLoader for ExcelGridLoader {
    fn load_grid(&self, file_path: &Path, sheet_index: usize) -> ImportResult<Grid> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = extension_of(path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 Excel 文件
        let mut workbook = open_workbook_auto(path)?;

        let available = workbook.sheet_names().len();
        let range = workbook
            .worksheet_range_at(sheet_index)
            .ok_or(ImportError::SheetNotFound {
                index: sheet_index,
                available,
            })??;

        // 已用区域可能不从 A1 开始，补齐前置空行/空栏
        let (row_offset, col_offset) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); row_offset];
        for data_row in range.rows() {
            let mut row = vec![CellValue::Empty; col_offset];
            row.extend(data_row.iter().map(CellValue::from));
            rows.push(row);
        }

        debug!(
            sheet_index = sheet_index,
            rows = rows.len(),
            row_offset = row_offset,
            col_offset = col_offset,
            "工作表读取完成"
        );
        Ok(Grid::new(rows))
    }
}

// ==========================================
// 通用读取器（根据扩展名自动选择）
// ==========================================
pub struct UniversalGridLoader;

impl GridLoader for UniversalGridLoader {
    fn load_grid(&self, file_path: &Path, sheet_index: usize) -> ImportResult<Grid> {
        let ext = extension_of(file_path);

        match ext.as_str() {
            "csv" => CsvGridLoader.load_grid(file_path, sheet_index),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelGridLoader.load_grid(file_path, sheet_index),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_loader_keeps_absolute_positions() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "標題,,").unwrap();
        writeln!(temp_file, ",國文,國語文,2,2").unwrap();

        let grid = CsvGridLoader.load_grid(temp_file.path(), 0).unwrap();

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.cell(1, 1), &CellValue::text("國文"));
        assert_eq!(grid.cell(1, 4), &CellValue::text("2"));
        assert!(grid.cell(1, 0).is_empty());
    }

    #[test]
    fn test_loader_file_not_found() {
        let result = UniversalGridLoader.load_grid(Path::new("non_existent.xlsx"), 1);
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_loader_unsupported_format() {
        let result = UniversalGridLoader.load_grid(Path::new("courses.docx"), 0);
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
