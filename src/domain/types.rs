// ==========================================
// 教師員額控管系統 - 领域类型定义
// ==========================================
// 职责: 领域标签（封闭枚举）、盈缺状态、日期序列化口径
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 学科领域 (Domain Label)
// ==========================================
// 封闭集合 + 未分类哨兵值
// 序列化格式: 中文标签（与 courses.json 一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DomainLabel {
    #[serde(rename = "國文/社會")]
    ChineseSocial,
    #[serde(rename = "英文")]
    English,
    #[serde(rename = "數學")]
    Math,
    #[serde(rename = "自然")]
    Science,
    #[serde(rename = "數學/自然")]
    MathScience,
    #[serde(rename = "體育")]
    PhysicalEducation,
    #[serde(rename = "健康/生涯")]
    HealthCareer,
    #[serde(rename = "美術")]
    Arts,
    #[serde(rename = "國防")]
    CivilDefense,
    #[serde(rename = "資處")]
    Informatics,
    #[serde(rename = "商經")]
    BusinessEconomics,
    #[serde(rename = "會計")]
    Accounting,
    #[serde(rename = "多媒")]
    Multimedia,
    #[serde(rename = "藝能")]
    ArtsAndSkills,
    #[serde(rename = "未分類", alias = "", alias = "其他")]
    Unclassified,
}

impl DomainLabel {
    /// 中文标签
    pub fn label(&self) -> &'static str {
        match self {
            DomainLabel::ChineseSocial => "國文/社會",
            DomainLabel::English => "英文",
            DomainLabel::Math => "數學",
            DomainLabel::Science => "自然",
            DomainLabel::MathScience => "數學/自然",
            DomainLabel::PhysicalEducation => "體育",
            DomainLabel::HealthCareer => "健康/生涯",
            DomainLabel::Arts => "美術",
            DomainLabel::CivilDefense => "國防",
            DomainLabel::Informatics => "資處",
            DomainLabel::BusinessEconomics => "商經",
            DomainLabel::Accounting => "會計",
            DomainLabel::Multimedia => "多媒",
            DomainLabel::ArtsAndSkills => "藝能",
            DomainLabel::Unclassified => "未分類",
        }
    }

    pub fn is_classified(&self) -> bool {
        *self != DomainLabel::Unclassified
    }
}

impl Default for DomainLabel {
    fn default() -> Self {
        DomainLabel::Unclassified
    }
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 节数盈缺状态 (Summary Status)
// ==========================================
// difference = required - base
// > 0 → 缺额; < 0 → 超额; = 0 → 持平
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    Shortage, // 缺额
    Surplus,  // 超额
    Balanced, // 持平
}

impl SummaryStatus {
    pub fn from_difference(difference: i64) -> Self {
        if difference > 0 {
            SummaryStatus::Shortage
        } else if difference < 0 {
            SummaryStatus::Surplus
        } else {
            SummaryStatus::Balanced
        }
    }
}

impl fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryStatus::Shortage => write!(f, "shortage"),
            SummaryStatus::Surplus => write!(f, "surplus"),
            SummaryStatus::Balanced => write!(f, "balanced"),
        }
    }
}

// ==========================================
// 日期序列化口径
// ==========================================
// 文档中 last_updated 以 "YYYY-MM-DD" 存储；空字符串视为尚未写入
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

// ==========================================
// 宽松读取 - 手工编辑过的 JSON 文档
// ==========================================
// null 视为默认值；节数可为整数、浮点（截尾）或数字字符串
pub mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn hours<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(i),
                None => n
                    .as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
                    .ok_or_else(|| D::Error::custom(format!("节数超出范围: {}", n))),
            },
            Value::String(s) if s.trim().is_empty() => Ok(0),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
                .ok_or_else(|| D::Error::custom(format!("节数不是数字: {}", s))),
            other => Err(D::Error::custom(format!("节数类型错误: {}", other))),
        }
    }

    /// 可选节数（部分更新请求用）：缺省/null → None
    pub fn optional_hours<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => hours(value).map(Some).map_err(D::Error::custom),
        }
    }
}
