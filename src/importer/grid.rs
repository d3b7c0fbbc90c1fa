// ==========================================
// 教師員額控管系統 - 原始单元格网格
// ==========================================
// 职责: 与具体文件格式无关的二维单元格表示
// ==========================================

use std::fmt;

/// 原始单元格值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            // 整数值不带小数点输出
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(cell: &calamine::Data) -> Self {
        match cell {
            calamine::Data::Empty => CellValue::Empty,
            calamine::Data::Int(i) => CellValue::Number(*i as f64),
            calamine::Data::Float(f) => CellValue::Number(*f),
            calamine::Data::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// 单张工作表（行 × 栏），行长度可不一致
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// 以字符串二维数组构造（空字符串视为空白）
    pub fn from_strings<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let s = cell.as_ref();
                        if s.is_empty() {
                            CellValue::Empty
                        } else {
                            CellValue::text(s)
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 越界视为空白
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let grid = Grid::from_strings(&[vec!["a", "b"]]);
        assert_eq!(grid.cell(0, 1), &CellValue::text("b"));
        assert!(grid.cell(0, 9).is_empty());
        assert!(grid.cell(5, 0).is_empty());
    }

    #[test]
    fn test_number_display() {
        assert_eq!(CellValue::Number(2.0).to_string(), "2");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    }
}
