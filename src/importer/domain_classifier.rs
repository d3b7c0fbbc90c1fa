// ==========================================
// 教師員額控管系統 - 领域判定器
// ==========================================
// 职责: 课程名称 / 区段标题 → 学科领域
// 规则（两层 + 沿用）:
// 1. 课程名称命中对照表 → 采用（即使与区段标题矛盾）
// 2. 否则采用区段标题关键字判定结果
// 3. 否则沿用同一轮解析中最近一次判定出的区段领域；无则未分类
// ==========================================

use crate::config::tables::{COURSE_DOMAIN_TABLE, SECTION_HEADER_RULES};
use crate::domain::types::DomainLabel;

/// 课程名称对照表查找（子字符串匹配，表序优先）
pub fn lookup_course_domain(course_name: &str) -> Option<DomainLabel> {
    COURSE_DOMAIN_TABLE
        .iter()
        .find(|(fragment, _)| course_name.contains(fragment))
        .map(|(_, domain)| *domain)
}

/// 区段标题关键字判定（标题先去除空白/换行）
pub fn resolve_section_header(header: &str) -> Option<DomainLabel> {
    let compact: String = header.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    SECTION_HEADER_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| compact.contains(k)))
        .map(|(_, domain)| *domain)
}

/// 无状态判定
pub fn classify(course_name: &str, section_header_hint: Option<&str>) -> DomainLabel {
    lookup_course_domain(course_name)
        .or_else(|| section_header_hint.and_then(resolve_section_header))
        .unwrap_or(DomainLabel::Unclassified)
}

// ==========================================
// DomainClassifier - 带区段状态的判定器
// ==========================================
// 每个科别的一轮解析使用一个实例
#[derive(Debug, Clone, Default)]
pub struct DomainClassifier {
    current_section: Option<DomainLabel>,
}

impl DomainClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录区段标题；无法判定的标题不改变当前区段
    pub fn observe_header(&mut self, header: &str) -> Option<DomainLabel> {
        if let Some(domain) = resolve_section_header(header) {
            self.current_section = Some(domain);
        }
        self.current_section
    }

    pub fn current_section(&self) -> Option<DomainLabel> {
        self.current_section
    }

    /// 判定课程领域
    pub fn classify(&self, course_name: &str) -> DomainLabel {
        lookup_course_domain(course_name)
            .or(self.current_section)
            .unwrap_or(DomainLabel::Unclassified)
    }

    pub fn reset(&mut self) {
        self.current_section = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_first_match_wins() {
        // "英文文法" 同时包含 "英文" 与 "英文文法"，表序中 "英文" 在前
        assert_eq!(lookup_course_domain("英文文法"), Some(DomainLabel::English));
        assert_eq!(lookup_course_domain("商業數學"), Some(DomainLabel::Math));
        assert_eq!(lookup_course_domain("程式設計"), None);
    }

    #[test]
    fn test_resolve_section_header() {
        assert_eq!(
            resolve_section_header("語文領域\n(國文)"),
            Some(DomainLabel::ChineseSocial)
        );
        assert_eq!(
            resolve_section_header("數 學"),
            Some(DomainLabel::MathScience)
        );
        assert_eq!(resolve_section_header("專業科目"), None);
        assert_eq!(resolve_section_header("  "), None);
    }

    #[test]
    fn test_lookup_beats_contradicting_header() {
        // 课名命中对照表，即使区段标题指向他领域
        assert_eq!(classify("英語文", Some("國文")), DomainLabel::English);

        let mut classifier = DomainClassifier::new();
        classifier.observe_header("國文");
        assert_eq!(classifier.classify("物理"), DomainLabel::Science);
    }

    #[test]
    fn test_header_fallback_and_carry_over() {
        let mut classifier = DomainClassifier::new();
        assert_eq!(classifier.classify("程式設計"), DomainLabel::Unclassified);

        classifier.observe_header("資處專業");
        assert_eq!(classifier.classify("程式設計"), DomainLabel::Informatics);

        // 无法判定的标题不覆盖当前区段
        classifier.observe_header("專業及實習科目");
        assert_eq!(classifier.current_section(), Some(DomainLabel::Informatics));
        assert_eq!(classifier.classify("程式設計"), DomainLabel::Informatics);

        classifier.reset();
        assert_eq!(classifier.current_section(), None);
        assert_eq!(classifier.classify("程式設計"), DomainLabel::Unclassified);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify("會計學", Some("會計")), DomainLabel::Accounting);
            assert_eq!(classify("不明課程", None), DomainLabel::Unclassified);
        }
    }
}
