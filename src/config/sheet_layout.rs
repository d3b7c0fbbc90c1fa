// ==========================================
// 教師員額控管系統 - 试算表栏位配置
// ==========================================
// 职责: 描述固定版面（起始行、区段栏、课名栏、各科别学期栏）
// 约束: 栏位由配置提供，不从表头推断
// ==========================================

use crate::config::tables::DEFAULT_DEPARTMENTS;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 单一学期栏位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodColumn {
    /// 学期键，如 "1-1"
    pub period: String,
    /// 0 起算的栏位索引
    pub column: usize,
}

/// 单一科别配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentConfig {
    pub id: String,
    pub name: String,
    #[serde(default = "default_class_count")]
    pub class_count: u32,
    pub columns: Vec<PeriodColumn>,
}

fn default_class_count() -> u32 {
    2
}

/// 工作表版面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// 工作表索引（默认第二张：课程节数预估表）
    #[serde(default = "default_sheet_index")]
    pub sheet_index: usize,
    /// 数据起始行（0 起算）
    #[serde(default = "default_data_start_row")]
    pub data_start_row: usize,
    /// 领域区段标题栏
    #[serde(default = "default_section_column")]
    pub section_column: usize,
    /// 课程名称栏
    #[serde(default = "default_name_column")]
    pub name_column: usize,
    #[serde(default = "default_school_year")]
    pub school_year: i32,
    pub departments: Vec<DepartmentConfig>,
}

fn default_sheet_index() -> usize {
    1
}

fn default_data_start_row() -> usize {
    4
}

fn default_section_column() -> usize {
    1
}

fn default_name_column() -> usize {
    2
}

fn default_school_year() -> i32 {
    113
}

impl Default for SheetLayout {
    fn default() -> Self {
        let departments = DEFAULT_DEPARTMENTS
            .iter()
            .map(|preset| DepartmentConfig {
                id: preset.id.to_string(),
                name: preset.name.to_string(),
                class_count: preset.class_count,
                columns: preset
                    .columns
                    .iter()
                    .map(|(period, column)| PeriodColumn {
                        period: period.to_string(),
                        column: *column,
                    })
                    .collect(),
            })
            .collect();

        Self {
            sheet_index: default_sheet_index(),
            data_start_row: default_data_start_row(),
            section_column: default_section_column(),
            name_column: default_name_column(),
            school_year: default_school_year(),
            departments,
        }
    }
}

impl SheetLayout {
    /// 从 JSON 文件加载版面配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)?;
        let layout: SheetLayout =
            serde_json::from_str(&raw).map_err(|e| ImportError::LayoutConfigError(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// 校验: 至少一个科别、每个科别至少一个学期栏、科别 id 唯一
    pub fn validate(&self) -> ImportResult<()> {
        if self.departments.is_empty() {
            return Err(ImportError::LayoutConfigError("未配置任何科别".to_string()));
        }

        let mut ids = std::collections::HashSet::new();
        for dept in &self.departments {
            if !ids.insert(dept.id.as_str()) {
                return Err(ImportError::LayoutConfigError(format!(
                    "科别 id 重复: {}",
                    dept.id
                )));
            }
            if dept.columns.is_empty() {
                return Err(ImportError::LayoutConfigError(format!(
                    "科别 {} 未配置学期栏位",
                    dept.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_layout() {
        let layout = SheetLayout::default();
        assert_eq!(layout.sheet_index, 1);
        assert_eq!(layout.data_start_row, 4);
        assert_eq!(layout.departments.len(), 5);
        assert_eq!(layout.departments[0].id, "multimedia");
        assert_eq!(layout.departments[0].columns.len(), 4);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_from_json_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"departments": [{{"id": "it", "name": "資訊科", "columns": [{{"period": "1-1", "column": 3}}]}}]}}"#
        )
        .unwrap();

        let layout = SheetLayout::from_json_file(temp_file.path()).unwrap();
        assert_eq!(layout.data_start_row, 4);
        assert_eq!(layout.name_column, 2);
        assert_eq!(layout.departments[0].class_count, 2);
    }

    #[test]
    fn test_layout_rejects_duplicate_department() {
        let mut layout = SheetLayout::default();
        let dup = layout.departments[0].clone();
        layout.departments.push(dup);
        assert!(matches!(
            layout.validate(),
            Err(ImportError::LayoutConfigError(_))
        ));
    }
}
