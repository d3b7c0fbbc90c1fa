// ==========================================
// 教師員額控管系統 - 员额汇总引擎
// ==========================================
// 职责:
// 1. 单一领域部分更新 + 派生字段重算
// 2. 全校节数盈缺总览
// 红线: 派生字段一律由服务端重算，不信任请求内容
// ==========================================

use crate::domain::staffing::{DomainStaffing, DomainUpdate, StaffingDocument};
use crate::domain::summary::{DomainSummary, SummaryReport};
use crate::domain::types::SummaryStatus;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// 部分更新的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// 已套用，文档 last_updated 已更新
    Applied,
    /// 找不到领域，文档未变更
    DomainNotFound,
}

// ==========================================
// StaffingAggregator - 员额汇总引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数（除就地修改传入文档）
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffingAggregator;

impl StaffingAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 套用单一领域的部分更新
    ///
    /// # 规则
    /// - total_base_hours / required_hours / note: 出现即覆盖
    /// - formal_teachers: 整表替换，并重算 formal_count / evening_formal_count / total_base_hours
    ///   （同时提供 total_base_hours 时，以重算结果为准）
    /// - substitute_teachers: 整表替换，并重算 substitute_count
    /// - 成功套用后更新文档 last_updated
    pub fn apply_domain_update(
        &self,
        document: &mut StaffingDocument,
        domain_id: &str,
        update: DomainUpdate,
        today: NaiveDate,
    ) -> UpdateOutcome {
        let Some(domain) = document.find_domain_mut(domain_id) else {
            warn!(domain_id = %domain_id, "领域不存在，未变更");
            return UpdateOutcome::DomainNotFound;
        };

        apply_to_domain(domain, update);
        document.last_updated = Some(today);
        UpdateOutcome::Applied
    }

    /// 重算所有领域的派生字段（整份文档写入前使用）
    pub fn recompute_all(&self, document: &mut StaffingDocument) {
        for domain in &mut document.domains {
            domain.recompute_formal();
            domain.recompute_substitute();
        }
    }

    /// 计算节数总览
    pub fn compute_summary(&self, document: &StaffingDocument) -> SummaryReport {
        let mut domains = Vec::with_capacity(document.domains.len());
        let mut total_base = 0i64;
        let mut total_required = 0i64;

        for domain in &document.domains {
            let summary = summarize_domain(domain);
            total_base += summary.base_hours;
            total_required += summary.required_hours;
            domains.push(summary);
        }

        SummaryReport {
            school_year: document.school_year,
            domains,
            total_base,
            total_required,
            total_difference: total_required - total_base,
        }
    }
}

fn apply_to_domain(domain: &mut DomainStaffing, update: DomainUpdate) {
    if let Some(hours) = update.total_base_hours {
        domain.total_base_hours = hours;
    }
    if let Some(hours) = update.required_hours {
        domain.required_hours = hours;
    }
    if let Some(note) = update.note {
        domain.note = note;
    }

    if let Some(teachers) = update.formal_teachers {
        domain.formal_teachers = teachers;
        domain.recompute_formal();
    }

    if let Some(substitutes) = update.substitute_teachers {
        domain.substitute_teachers = substitutes;
        domain.recompute_substitute();
    }

    debug!(
        domain_id = %domain.id,
        formal_count = domain.formal_count,
        evening_formal_count = domain.evening_formal_count,
        substitute_count = domain.substitute_count,
        total_base_hours = domain.total_base_hours,
        "领域更新已套用"
    );
}

fn summarize_domain(domain: &DomainStaffing) -> DomainSummary {
    let base_hours = domain.total_base_hours;
    let required_hours = domain.required_hours;
    let difference = required_hours - base_hours;
    let teacher_count = domain.formal_teachers.len();

    // 仅缺额且有教师时计算平均超时
    let avg_overtime = if difference > 0 && teacher_count > 0 {
        round2(difference as f64 / teacher_count as f64)
    } else {
        0.0
    };

    DomainSummary {
        id: domain.id.clone(),
        name: domain.name.clone(),
        base_hours,
        required_hours,
        difference,
        teacher_count,
        avg_overtime,
        status: SummaryStatus::from_difference(difference),
    }
}

/// 四舍五入到两位小数；恰好落在中点时取偶数（0.125 → 0.12）
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
