// ==========================================
// 教師員額控管系統 - 员额领域模型
// ==========================================
// 职责: 正式/代理教师、领域员额、员额文档、部分更新请求
// 红线: 派生字段（人数、进修部人数、基本节数）只能由服务端重算
// ==========================================

use crate::domain::types::{date_format, lenient};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ==========================================
// TeacherRecord - 正式教师
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherRecord {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::hours")]
    pub base_hours: i64,
    /// 是否为进修部（夜间部）教师
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub is_evening: bool,
    /// 前端附带的其他字段，原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeacherRecord {
    pub fn new(name: impl Into<String>, base_hours: i64, is_evening: bool) -> Self {
        Self {
            name: name.into(),
            base_hours,
            is_evening,
            extra: Map::new(),
        }
    }
}

// ==========================================
// SubstituteTeacherRecord - 代理教师
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubstituteTeacherRecord {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::hours")]
    pub hours: i64,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubstituteTeacherRecord {
    pub fn new(name: impl Into<String>, hours: i64, active: bool) -> Self {
        Self {
            name: name.into(),
            hours,
            active,
            extra: Map::new(),
        }
    }
}

// ==========================================
// DomainStaffing - 领域员额
// ==========================================
// 不变量（每次写入后成立）:
// - formal_count == formal_teachers.len()
// - evening_formal_count == 进修部正式教师数
// - total_base_hours == Σ formal_teachers.base_hours
// - substitute_count == substitute_teachers.len()
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainStaffing {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::hours")]
    pub total_base_hours: i64,
    #[serde(default, deserialize_with = "lenient::hours")]
    pub required_hours: i64,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub note: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub formal_teachers: Vec<TeacherRecord>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub formal_count: usize,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub evening_formal_count: usize,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub substitute_teachers: Vec<SubstituteTeacherRecord>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub substitute_count: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DomainStaffing {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// 由正式教师列表重算 formal_count / evening_formal_count / total_base_hours
    pub fn recompute_formal(&mut self) {
        self.formal_count = self.formal_teachers.len();
        self.evening_formal_count = self
            .formal_teachers
            .iter()
            .filter(|t| t.is_evening)
            .count();
        self.total_base_hours = self.formal_teachers.iter().map(|t| t.base_hours).sum();
    }

    /// 由代理教师列表重算 substitute_count
    pub fn recompute_substitute(&mut self) {
        self.substitute_count = self.substitute_teachers.len();
    }

    /// 启用中的代理教师数
    pub fn active_substitute_count(&self) -> usize {
        self.substitute_teachers.iter().filter(|t| t.active).count()
    }
}

// ==========================================
// StaffingDocument - 员额文档 (teachers.json)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingDocument {
    #[serde(default = "default_school_year")]
    pub school_year: i32,
    #[serde(default, with = "date_format")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub domains: Vec<DomainStaffing>,
}

fn default_school_year() -> i32 {
    115
}

impl Default for StaffingDocument {
    fn default() -> Self {
        Self {
            school_year: default_school_year(),
            last_updated: None,
            domains: Vec::new(),
        }
    }
}

impl StaffingDocument {
    pub fn find_domain(&self, domain_id: &str) -> Option<&DomainStaffing> {
        self.domains.iter().find(|d| d.id == domain_id)
    }

    pub fn find_domain_mut(&mut self, domain_id: &str) -> Option<&mut DomainStaffing> {
        self.domains.iter_mut().find(|d| d.id == domain_id)
    }
}

// ==========================================
// DomainUpdate - 单一领域的部分更新请求
// ==========================================
// 仅出现的字段生效；未知字段忽略
// formal_teachers / substitute_teachers 出现时整表替换
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainUpdate {
    #[serde(
        default,
        deserialize_with = "lenient::optional_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_base_hours: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub required_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_teachers: Option<Vec<TeacherRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute_teachers: Option<Vec<SubstituteTeacherRecord>>,
}

impl DomainUpdate {
    pub fn is_empty(&self) -> bool {
        self.total_base_hours.is_none()
            && self.required_hours.is_none()
            && self.note.is_none()
            && self.formal_teachers.is_none()
            && self.substitute_teachers.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_record_keeps_extra_fields() {
        let json = r#"{"name": "王老師", "base_hours": 16, "is_evening": true, "title": "導師"}"#;
        let teacher: TeacherRecord = serde_json::from_str(json).unwrap();

        assert_eq!(teacher.base_hours, 16);
        assert!(teacher.is_evening);
        assert_eq!(teacher.extra.get("title"), Some(&Value::from("導師")));

        let back = serde_json::to_value(&teacher).unwrap();
        assert_eq!(back["title"], "導師");
    }

    #[test]
    fn test_domain_update_ignores_unknown_fields() {
        let json = r#"{"required_hours": 20, "unexpected": 1}"#;
        let update: DomainUpdate = serde_json::from_str(json).unwrap();

        assert_eq!(update.required_hours, Some(20));
        assert!(update.formal_teachers.is_none());
        assert!(!update.is_empty());
        assert!(DomainUpdate::default().is_empty());
    }

    #[test]
    fn test_recompute_formal() {
        let mut domain = DomainStaffing::new("english", "英文");
        domain.formal_teachers = vec![
            TeacherRecord::new("甲", 16, false),
            TeacherRecord::new("乙", 14, true),
        ];
        domain.total_base_hours = 999;
        domain.recompute_formal();

        assert_eq!(domain.formal_count, 2);
        assert_eq!(domain.evening_formal_count, 1);
        assert_eq!(domain.total_base_hours, 30);
    }

    #[test]
    fn test_hand_edited_document_loads() {
        let json = r#"{
            "school_year": 115,
            "domains": [
                {"id": "english", "name": "英文", "note": null, "required_hours": "16",
                 "formal_teachers": [
                     {"name": "甲", "base_hours": 7.5, "is_evening": null},
                     {"name": null, "base_hours": null}
                 ],
                 "substitute_teachers": null},
                {"name": "無編號"}
            ]
        }"#;
        let doc: StaffingDocument = serde_json::from_str(json).unwrap();

        let english = doc.find_domain("english").unwrap();
        assert_eq!(english.note, "");
        assert_eq!(english.required_hours, 16);
        assert_eq!(english.formal_teachers[0].base_hours, 7);
        assert!(!english.formal_teachers[0].is_evening);
        assert_eq!(english.formal_teachers[1].base_hours, 0);
        assert!(english.substitute_teachers.is_empty());
        assert_eq!(doc.domains[1].id, "");
    }

    #[test]
    fn test_non_numeric_hours_rejected() {
        let json = r#"{"id": "math", "required_hours": "很多"}"#;
        assert!(serde_json::from_str::<DomainStaffing>(json).is_err());

        let update = r#"{"required_hours": [1]}"#;
        assert!(serde_json::from_str::<DomainUpdate>(update).is_err());

        let update: DomainUpdate = serde_json::from_str(r#"{"total_base_hours": 12.0}"#).unwrap();
        assert_eq!(update.total_base_hours, Some(12));
    }
}
