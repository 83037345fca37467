// ==========================================
// 学期教学计划日历 - 日历汇总
// ==========================================
// 职责: 只读聚合（状态计数、教学单元覆盖情况），供展示层标注
// ==========================================

use serde::Serialize;

use crate::domain::{CalendarDay, DayStatus, TeachingUnit};

/// 一个教学周的教学天数（周一至周五）
pub const TEACHING_DAYS_PER_WEEK: f64 = 5.0;

/// 日历状态计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSummary {
    pub total_days: usize,
    pub teaching_days: usize,
    pub non_teaching_days: usize,
    pub weekend_days: usize,
}

impl CalendarSummary {
    pub fn from_days<'a>(days: impl IntoIterator<Item = &'a CalendarDay>) -> Self {
        let mut summary = Self::default();
        for day in days {
            summary.total_days += 1;
            match day.status() {
                DayStatus::Teaching => summary.teaching_days += 1,
                DayStatus::NonTeaching => summary.non_teaching_days += 1,
                DayStatus::Weekend => summary.weekend_days += 1,
            }
        }
        summary
    }
}

/// 教学单元覆盖情况
///
/// 只统计派生序列中实际存在的日期；单元跨出学年区间的部分不计入。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCoverage {
    pub unit_id: String,
    pub days: CalendarSummary,
    /// 按每周课时折算的计划课时: teaching_days / 5 × weekly_hours
    pub planned_hours: f64,
}

impl UnitCoverage {
    pub fn for_unit(unit: &TeachingUnit, days: &[CalendarDay]) -> Self {
        // days 有序，二分定位单元跨度
        let from = days.partition_point(|d| d.date() < unit.start_date());
        let to = days.partition_point(|d| d.date() <= unit.end_date());
        let summary = CalendarSummary::from_days(&days[from..to.max(from)]);

        let planned_hours =
            summary.teaching_days as f64 / TEACHING_DAYS_PER_WEEK * unit.weekly_hours();

        Self {
            unit_id: unit.id().to_string(),
            days: summary,
            planned_hours,
        }
    }
}
