// ==========================================
// 教師員額控管系統 - 静态对照表
// ==========================================
// 职责: 进程级只读常量（领域对照、排除词、标题词、默认栏位配置）
// 约束: 顺序即优先级，先匹配者胜出
// ==========================================

use crate::domain::types::DomainLabel;

// ==========================================
// 课程名称片段 → 领域（第一优先）
// ==========================================
// 以子字符串匹配，按表序检查
pub const COURSE_DOMAIN_TABLE: &[(&str, DomainLabel)] = &[
    // 國文/社會
    ("國語文", DomainLabel::ChineseSocial),
    ("現代詩文賞析", DomainLabel::ChineseSocial),
    ("古典文學選讀", DomainLabel::ChineseSocial),
    ("國文閱讀與寫作", DomainLabel::ChineseSocial),
    ("跨領域趨勢閱讀", DomainLabel::ChineseSocial),
    ("歷史", DomainLabel::ChineseSocial),
    ("地理", DomainLabel::ChineseSocial),
    ("公民與社會", DomainLabel::ChineseSocial),
    ("法律與生活", DomainLabel::ChineseSocial),
    ("文學與生活", DomainLabel::ChineseSocial),
    // 英文
    ("英語文", DomainLabel::English),
    ("英文", DomainLabel::English),
    ("生活英語會話", DomainLabel::English),
    ("基礎英文閱讀與寫作", DomainLabel::English),
    ("英語聽講練習", DomainLabel::English),
    ("英文文法", DomainLabel::English),
    ("英語口語訓練", DomainLabel::English),
    ("商業英文", DomainLabel::English),
    ("觀光英語", DomainLabel::English),
    ("英文閱讀", DomainLabel::English),
    // 數學
    ("數學", DomainLabel::Math),
    ("數學演習", DomainLabel::Math),
    ("數學應用", DomainLabel::Math),
    ("商業數學", DomainLabel::Math),
    ("趣味數學", DomainLabel::Math),
    // 自然
    ("物理", DomainLabel::Science),
    ("化學", DomainLabel::Science),
    ("生物", DomainLabel::Science),
    ("自然科學", DomainLabel::Science),
    // 體育
    ("體育", DomainLabel::PhysicalEducation),
    ("體  育", DomainLabel::PhysicalEducation),
    // 健康/生涯
    ("健康與護理", DomainLabel::HealthCareer),
    ("生涯規劃", DomainLabel::HealthCareer),
    ("生命教育", DomainLabel::HealthCareer),
    // 美術（不含设计群专业课程）
    ("音樂", DomainLabel::Arts),
    ("美術", DomainLabel::Arts),
    ("藝術生活", DomainLabel::Arts),
    // 國防
    ("全民國防教育", DomainLabel::CivilDefense),
    // 跨领域选修
    ("人工智慧", DomainLabel::Informatics),
    ("說故事學行銷", DomainLabel::BusinessEconomics),
];

// ==========================================
// 区段标题关键字 → 领域（第二优先）
// ==========================================
// 任一关键字命中即采用该领域
pub const SECTION_HEADER_RULES: &[(&[&str], DomainLabel)] = &[
    (&["國文", "社會"], DomainLabel::ChineseSocial),
    (&["英文"], DomainLabel::English),
    (&["數學", "自然"], DomainLabel::MathScience),
    (&["會計"], DomainLabel::Accounting),
    (&["商經"], DomainLabel::BusinessEconomics),
    (&["資處"], DomainLabel::Informatics),
    (&["多媒"], DomainLabel::Multimedia),
    (&["藝能"], DomainLabel::ArtsAndSkills),
];

// ==========================================
// 试算表：不列为课程的名称关键字
// ==========================================
pub const EXCLUDED_COURSE_KEYWORDS: &[&str] = &[
    "小計",
    "總節數",
    "團體活動",
    "彈性課程增廣",
    "彈性課程補強",
    "本土語",
];

// ==========================================
// PDF：标题/小计行关键字
// ==========================================
pub const PDF_TITLE_KEYWORDS: &[&str] = &[
    "教學科目", "學分", "節數", "表", "課程類別",
    "學年度", "入學", "適用", "部定", "校訂",
    "必修", "選修", "名稱", "類別", "群科",
    "一年級", "二年級", "三年級", "上", "下",
    "科目", "領域", "商業與管理", "設計群",
    "小計", "總計", "合計", "總節數",
];

// ==========================================
// 单元格占位值（视同空白）
// ==========================================
pub const CELL_PLACEHOLDERS: &[&str] = &["nan", "NaN", "None", "null"];

// ==========================================
// PDF 节数合理范围（闭区间）
// ==========================================
pub const PDF_HOURS_MIN: u32 = 0;
pub const PDF_HOURS_MAX: u32 = 20;

// ==========================================
// 默认科别栏位配置
// ==========================================
// 一年级: 多媒(3,4) 資處(5,6) 會計(7,8) 商經(9,10) 應英(11,12)
// 二年级: 多媒(13,14) 資處(15,16) 會計(17,18) 商經(19,20) 應英(21,22)
// 三年级: 資處(23,24) 會計(25,26) 商經(27,28) 應英(29,30)
pub struct DepartmentPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub class_count: u32,
    pub columns: &'static [(&'static str, usize)],
}

pub const DEFAULT_DEPARTMENTS: &[DepartmentPreset] = &[
    DepartmentPreset {
        id: "multimedia",
        name: "多媒體設計科",
        class_count: 2,
        columns: &[("1-1", 3), ("1-2", 4), ("2-1", 13), ("2-2", 14)],
    },
    DepartmentPreset {
        id: "data_processing",
        name: "資處科",
        class_count: 2,
        columns: &[
            ("1-1", 5), ("1-2", 6),
            ("2-1", 15), ("2-2", 16),
            ("3-1", 23), ("3-2", 24),
        ],
    },
    DepartmentPreset {
        id: "accounting",
        name: "會計科",
        class_count: 2,
        columns: &[
            ("1-1", 7), ("1-2", 8),
            ("2-1", 17), ("2-2", 18),
            ("3-1", 25), ("3-2", 26),
        ],
    },
    DepartmentPreset {
        id: "business",
        name: "商經科",
        class_count: 2,
        columns: &[
            ("1-1", 9), ("1-2", 10),
            ("2-1", 19), ("2-2", 20),
            ("3-1", 27), ("3-2", 28),
        ],
    },
    DepartmentPreset {
        id: "applied_english",
        name: "應用英語科",
        class_count: 2,
        columns: &[
            ("1-1", 11), ("1-2", 12),
            ("2-1", 21), ("2-2", 22),
            ("3-1", 29), ("3-2", 30),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_departments_have_unique_columns() {
        let mut seen = std::collections::HashSet::new();
        for dept in DEFAULT_DEPARTMENTS {
            for (_, col) in dept.columns {
                assert!(seen.insert(*col), "栏位 {} 重复配置", col);
            }
        }
    }

    #[test]
    fn test_pdf_keywords_include_totals() {
        assert!(PDF_TITLE_KEYWORDS.contains(&"總節數"));
        assert!(PDF_TITLE_KEYWORDS.contains(&"小計"));
    }
}
