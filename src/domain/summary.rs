// ==========================================
// 教師員額控管系統 - 节数总览报表
// ==========================================
// 派生结果，不落盘
// ==========================================

use crate::domain::types::SummaryStatus;
use serde::{Deserialize, Serialize};

/// 单一领域的节数盈缺
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSummary {
    pub id: String,
    pub name: String,
    pub base_hours: i64,
    pub required_hours: i64,
    /// required_hours - base_hours
    pub difference: i64,
    pub teacher_count: usize,
    /// 缺额时每位正式教师平均超时节数（两位小数），否则为 0
    pub avg_overtime: f64,
    pub status: SummaryStatus,
}

/// 全校节数总览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub school_year: i32,
    pub domains: Vec<DomainSummary>,
    pub total_base: i64,
    pub total_required: i64,
    pub total_difference: i64,
}

impl SummaryReport {
    pub fn shortage_domains(&self) -> impl Iterator<Item = &DomainSummary> {
        self.domains
            .iter()
            .filter(|d| d.status == SummaryStatus::Shortage)
    }
}
