// ==========================================
// 学期教学计划日历 - 日历派生引擎
// ==========================================
// 职责: 学年区间 + 非教学日集合 → 有序日历日序列
// 红线:
// - 纯函数，无隐藏状态，相同输入得到相同输出
// - 非法区间（start > end）退化为空序列，不报错
// - 非教学日按日历日查找（HashSet），不做逐日线性扫描
// ==========================================

use chrono::NaiveDate;

use crate::domain::{CalendarDay, SchoolCalendar};

// ==========================================
// CalendarDerivationEngine
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct CalendarDerivationEngine;

impl CalendarDerivationEngine {
    /// 创建新的 CalendarDerivationEngine 实例
    pub fn new() -> Self {
        Self
    }

    /// 派生日历日序列（主入口）
    ///
    /// # 参数
    /// - calendar: 学年日历
    ///
    /// # 返回
    /// - 区间内每个日历日一条记录，按日期严格升序
    /// - 区间无效时返回空序列
    pub fn derive_days(&self, calendar: &SchoolCalendar) -> Vec<CalendarDay> {
        if !calendar.is_valid_range() {
            tracing::warn!(
                start = %calendar.start_date,
                end = %calendar.end_date,
                "学年日历区间无效(start > end)，返回空日历"
            );
            return Vec::new();
        }

        let non_teaching = calendar.non_teaching_set();
        let mut days = Vec::with_capacity(calendar.day_count());

        let mut current = calendar.start_date;
        loop {
            days.push(CalendarDay::derive(current, non_teaching.contains(&current)));

            if current >= calendar.end_date {
                break;
            }
            current = match current.succ_opt() {
                Some(next) => next,
                None => break, // NaiveDate::MAX
            };
        }

        tracing::debug!(
            start = %calendar.start_date,
            end = %calendar.end_date,
            day_count = days.len(),
            "日历派生完成"
        );

        days
    }

    /// 计算日期在派生序列中的下标
    ///
    /// 派生序列无空洞、无重复，下标即距起始日的天数。
    pub fn index_of(calendar: &SchoolCalendar, date: NaiveDate) -> Option<usize> {
        if !calendar.is_valid_range() || !calendar.contains(date) {
            return None;
        }
        Some((date - calendar.start_date).num_days() as usize)
    }
}

/// 派生日历日序列（函数式入口）
pub fn derive_days(calendar: &SchoolCalendar) -> Vec<CalendarDay> {
    CalendarDerivationEngine::new().derive_days(calendar)
}
