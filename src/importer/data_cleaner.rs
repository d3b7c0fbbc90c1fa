// ==========================================
// 教師員額控管系統 - 数据清洗器实现
// ==========================================
// 职责: TRIM / 去换行 / 占位值识别 / 节数强制转换
// 约束: 坏单元格一律视为 0，不产生错误
// ==========================================

use crate::config::tables::CELL_PLACEHOLDERS;
use crate::importer::grid::CellValue;
use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_cell(&self, value: Option<&str>) -> String {
        match value {
            Some(v) => v.trim().replace(['\n', '\r'], ""),
            None => String::new(),
        }
    }

    fn compact_text(&self, value: &str) -> String {
        value.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn is_placeholder(&self, value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || CELL_PLACEHOLDERS.contains(&trimmed)
    }

    fn coerce_hours(&self, cell: &CellValue) -> u32 {
        let value = match cell {
            CellValue::Empty => return 0,
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => parse_float(s),
        };

        match value {
            Some(v) if v.is_finite() && v > 0.0 => {
                let truncated = v.trunc();
                if truncated >= u32::MAX as f64 {
                    u32::MAX
                } else {
                    truncated as u32
                }
            }
            _ => 0,
        }
    }

    fn parse_integer(&self, value: &str) -> Option<i64> {
        parse_float(value)
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    }
}

/// 解析浮点数，兼容全形数字与全形小数点
fn parse_float(value: &str) -> Option<f64> {
    let normalized: String = value
        .trim()
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
            '．' => '.',
            '－' => '-',
            _ => c,
        })
        .collect();

    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_cell() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_cell(Some("  國語\n文 ")), "國語文");
        assert_eq!(cleaner.clean_cell(None), "");
        assert_eq!(cleaner.compact_text("小   計\n"), "小計");
    }

    #[test]
    fn test_is_placeholder() {
        let cleaner = DataCleaner;
        assert!(cleaner.is_placeholder(""));
        assert!(cleaner.is_placeholder("  "));
        assert!(cleaner.is_placeholder("nan"));
        assert!(!cleaner.is_placeholder("部定必修"));
    }

    #[test]
    fn test_coerce_hours() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.coerce_hours(&CellValue::Number(2.0)), 2);
        assert_eq!(cleaner.coerce_hours(&CellValue::Number(2.9)), 2);
        assert_eq!(cleaner.coerce_hours(&CellValue::text("3")), 3);
        assert_eq!(cleaner.coerce_hours(&CellValue::text("3.0")), 3);
        assert_eq!(cleaner.coerce_hours(&CellValue::text("３")), 3);
        assert_eq!(cleaner.coerce_hours(&CellValue::text("選")), 0);
        assert_eq!(cleaner.coerce_hours(&CellValue::Number(-2.0)), 0);
        assert_eq!(cleaner.coerce_hours(&CellValue::Number(f64::NAN)), 0);
        assert_eq!(cleaner.coerce_hours(&CellValue::Empty), 0);
    }

    #[test]
    fn test_parse_integer() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_integer("12"), Some(12));
        assert_eq!(cleaner.parse_integer("2.5"), Some(2));
        assert_eq!(cleaner.parse_integer("-1"), Some(-1));
        assert_eq!(cleaner.parse_integer("abc"), None);
        assert_eq!(cleaner.parse_integer(""), None);
        assert_eq!(cleaner.parse_integer("inf"), None);
    }
}
