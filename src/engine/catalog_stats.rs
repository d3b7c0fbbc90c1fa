// ==========================================
// 教師員額控管系統 - 课程目录统计
// ==========================================
// 职责: 各科别课程数、总节数、领域课程数（首次出现顺序）
// ==========================================

use crate::domain::course::{CourseCatalogDocument, DepartmentSchedule};
use crate::domain::types::DomainLabel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: DomainLabel,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub id: String,
    pub name: String,
    pub course_count: usize,
    pub total_hours: u32,
    pub domain_counts: Vec<DomainCount>,
    /// 待人工判定领域的课程数
    pub unclassified_count: usize,
}

pub struct CatalogStatsEngine;

impl CatalogStatsEngine {
    pub fn compute(catalog: &CourseCatalogDocument) -> Vec<DepartmentStats> {
        catalog.departments.iter().map(Self::department).collect()
    }

    pub fn department(dept: &DepartmentSchedule) -> DepartmentStats {
        let mut domain_counts: Vec<DomainCount> = Vec::new();
        for course in &dept.courses {
            match domain_counts.iter_mut().find(|dc| dc.domain == course.domain) {
                Some(dc) => dc.count += 1,
                None => domain_counts.push(DomainCount {
                    domain: course.domain,
                    count: 1,
                }),
            }
        }

        DepartmentStats {
            id: dept.id.clone(),
            name: dept.name.clone(),
            course_count: dept.courses.len(),
            total_hours: dept.courses.iter().map(|c| c.total_hours).sum(),
            domain_counts,
            unclassified_count: dept
                .courses
                .iter()
                .filter(|c| !c.domain.is_classified())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::CourseRecord;
    use crate::domain::course::PeriodHours;

    fn course(domain: DomainLabel, name: &str, hours: u32) -> CourseRecord {
        let mut per = PeriodHours::new();
        per.insert("1-1".to_string(), hours);
        CourseRecord::new(domain, name, per)
    }

    #[test]
    fn test_domain_counts_keep_first_seen_order() {
        let dept = DepartmentSchedule {
            id: "business".to_string(),
            name: "商經科".to_string(),
            class_count: 2,
            courses: vec![
                course(DomainLabel::English, "英語文", 4),
                course(DomainLabel::ChineseSocial, "國語文", 4),
                course(DomainLabel::English, "商業英文", 2),
                course(DomainLabel::Unclassified, "專題實作", 3),
            ],
        };

        let stats = CatalogStatsEngine::department(&dept);

        assert_eq!(stats.course_count, 4);
        assert_eq!(stats.total_hours, 13);
        assert_eq!(
            stats.domain_counts,
            vec![
                DomainCount { domain: DomainLabel::English, count: 2 },
                DomainCount { domain: DomainLabel::ChineseSocial, count: 1 },
                DomainCount { domain: DomainLabel::Unclassified, count: 1 },
            ]
        );
        assert_eq!(stats.unclassified_count, 1);
    }
}
