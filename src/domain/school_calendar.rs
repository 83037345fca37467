// ==========================================
// 学期教学计划日历 - 学年日历领域模型
// ==========================================
// 职责: 定义日生成的边界配置（学年起止 + 非教学日集合）
// ==========================================

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use crate::domain::calendar_date::CalendarDate;

// ==========================================
// SchoolCalendar - 学年日历
// ==========================================
// 说明:
// - start_date > end_date 不拒绝，派生时退化为空序列
// - 非教学日可以落在区间之外，派生时不会被匹配
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCalendar {
    pub start_date: NaiveDate,              // 学年开始日期
    pub end_date: NaiveDate,                // 学年结束日期（含）
    pub non_teaching_dates: Vec<NaiveDate>, // 非教学日（节假日）
}

impl SchoolCalendar {
    /// 创建学年日历
    ///
    /// 非教学日以任意可归一化日期传入，统一截断为日历日保存。
    pub fn new<D: CalendarDate>(
        start_date: NaiveDate,
        end_date: NaiveDate,
        non_teaching_dates: impl IntoIterator<Item = D>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            non_teaching_dates: non_teaching_dates
                .into_iter()
                .map(|d| d.calendar_day())
                .collect(),
        }
    }

    /// 区间是否有效（start <= end）
    pub fn is_valid_range(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// 区间内的日历天数（无效区间为 0）
    pub fn day_count(&self) -> usize {
        if !self.is_valid_range() {
            return 0;
        }
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    /// 日期是否在区间内
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// 非教学日查找表（按日历日去重）
    pub fn non_teaching_set(&self) -> HashSet<NaiveDate> {
        self.non_teaching_dates.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_count() {
        let cal = SchoolCalendar::new(d(2024, 9, 15), d(2024, 9, 17), Vec::<NaiveDate>::new());
        assert_eq!(cal.day_count(), 3);

        let reversed = SchoolCalendar::new(d(2024, 9, 17), d(2024, 9, 15), Vec::<NaiveDate>::new());
        assert!(!reversed.is_valid_range());
        assert_eq!(reversed.day_count(), 0);
    }

    #[test]
    fn test_non_teaching_dates_are_normalized() {
        let noon = d(2024, 9, 16).and_hms_opt(12, 30, 0).unwrap();
        let cal = SchoolCalendar::new(d(2024, 9, 15), d(2024, 9, 17), vec![noon, noon]);
        assert_eq!(cal.non_teaching_dates, vec![d(2024, 9, 16), d(2024, 9, 16)]);
        assert_eq!(cal.non_teaching_set().len(), 1);
    }
}
