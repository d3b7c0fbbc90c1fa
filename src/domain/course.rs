// ==========================================
// 教師員額控管系統 - 课程领域模型
// ==========================================
// 职责: 课程记录、科别课表、课程目录文档
// 红线: total_hours 恒等于各学期节数之和，不独立存储输入
// ==========================================

use crate::domain::types::{date_format, DomainLabel};
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ==========================================
// PeriodHours - 学期键 → 节数（保持栏位配置顺序）
// ==========================================
// 以 JSON 对象读写；键重复时后者覆盖前者，位置不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodHours(Vec<(String, u32)>);

impl PeriodHours {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 写入节数，返回旧值
    pub fn insert(&mut self, period: impl Into<String>, hours: u32) -> Option<u32> {
        let period = period.into();
        match self.0.iter_mut().find(|(k, _)| *k == period) {
            Some((_, slot)) => Some(std::mem::replace(slot, hours)),
            None => {
                self.0.push((period, hours));
                None
            }
        }
    }

    pub fn get(&self, period: &str) -> Option<&u32> {
        self.0.iter().find(|(k, _)| k == period).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn periods(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &u32> + '_ {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for PeriodHours {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut hours = PeriodHours::new();
        for (period, value) in iter {
            hours.insert(period, value);
        }
        hours
    }
}

impl Serialize for PeriodHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (period, hours) in &self.0 {
            map.serialize_entry(period, hours)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PeriodHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PeriodHoursVisitor;

        impl<'de> Visitor<'de> for PeriodHoursVisitor {
            type Value = PeriodHours;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("学期键到节数的对象")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut hours = PeriodHours::new();
                while let Some((period, value)) = access.next_entry::<String, u32>()? {
                    hours.insert(period, value);
                }
                Ok(hours)
            }
        }

        deserializer.deserialize_map(PeriodHoursVisitor)
    }
}

// ==========================================
// CourseRecord - 课程记录（试算表来源）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub domain: DomainLabel,
    pub name: String,
    pub total_hours: u32,
    /// 学期键（如 "1-1" = 一年级上学期）→ 节数
    #[serde(default)]
    pub per_period_hours: PeriodHours,
}

impl CourseRecord {
    /// 由各学期节数构造，total_hours 由此派生
    pub fn new(
        domain: DomainLabel,
        name: impl Into<String>,
        per_period_hours: PeriodHours,
    ) -> Self {
        let total_hours = per_period_hours.values().sum();
        Self {
            domain,
            name: name.into(),
            total_hours,
            per_period_hours,
        }
    }

    /// 重新派生 total_hours（编辑 per_period_hours 后调用）
    pub fn recompute_total(&mut self) {
        self.total_hours = self.per_period_hours.values().sum();
    }
}

// ==========================================
// DepartmentSchedule - 科别课表
// ==========================================
// 每次解析整批重建，不做增量合并
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSchedule {
    pub id: String,
    pub name: String,
    pub class_count: u32,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

// ==========================================
// CourseCatalogDocument - 课程目录文档 (courses.json)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalogDocument {
    #[serde(default)]
    pub school_year: i32,
    #[serde(default, with = "date_format")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default)]
    pub departments: Vec<DepartmentSchedule>,
}

impl CourseCatalogDocument {
    pub fn new(school_year: i32, departments: Vec<DepartmentSchedule>) -> Self {
        Self {
            school_year,
            last_updated: None,
            departments,
        }
    }

    pub fn course_count(&self) -> usize {
        self.departments.iter().map(|d| d.courses.len()).sum()
    }
}

// ==========================================
// PdfCourseRecord - 课程记录（PDF 课纲来源）
// ==========================================
// 领域与类别留待人工/后续步骤判定，解析时不推断
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfCourseRecord {
    pub name: String,
    pub total_hours: u32,
    /// 按出现顺序排列的节数
    pub per_period_hours: Vec<u32>,
    pub domain: Option<DomainLabel>,
    pub category: Option<String>,
}

impl PdfCourseRecord {
    pub fn new(name: impl Into<String>, per_period_hours: Vec<u32>) -> Self {
        let total_hours = per_period_hours.iter().sum();
        Self {
            name: name.into(),
            total_hours,
            per_period_hours,
            domain: None,
            category: None,
        }
    }
}
