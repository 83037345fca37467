// ==========================================
// 学期教学计划日历 - 日历日领域模型
// ==========================================
// 职责: 派生出的单日记录（教学日 / 非教学日 / 周末）
// 红线:
// 1. is_weekend 只由星期几决定，创建后不可变
// 2. 周末: is_teaching_day = false 且 is_non_teaching = false
// 3. 非周末: is_teaching_day 与 is_non_teaching 恰好一个为 true
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::domain::types::{is_weekend, DayStatus};

/// 日历日 (CalendarDay)
///
/// 字段私有，只能由派生引擎创建、由状态仓库切换，
/// 外部无法构造出违反上述不变量的记录。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDay {
    date: NaiveDate,
    is_teaching_day: bool,
    is_weekend: bool,
    is_non_teaching: bool,
}

impl CalendarDay {
    /// 按规则派生单日记录
    ///
    /// # 参数
    /// - date: 日历日
    /// - listed_non_teaching: 是否命中非教学日集合
    pub(crate) fn derive(date: NaiveDate, listed_non_teaching: bool) -> Self {
        let weekend = is_weekend(date);
        Self {
            date,
            is_teaching_day: !weekend && !listed_non_teaching,
            is_weekend: weekend,
            is_non_teaching: !weekend && listed_non_teaching,
        }
    }

    /// 切换教学状态（教学日 ⇄ 非教学日）
    ///
    /// # 返回
    /// - true: 已切换
    /// - false: 周末，不做任何修改
    pub(crate) fn toggle_status(&mut self) -> bool {
        if !self.status().is_toggleable() {
            return false;
        }
        std::mem::swap(&mut self.is_teaching_day, &mut self.is_non_teaching);
        true
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_teaching_day(&self) -> bool {
        self.is_teaching_day
    }

    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    pub fn is_non_teaching(&self) -> bool {
        self.is_non_teaching
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// 三类状态
    pub fn status(&self) -> DayStatus {
        if self.is_weekend {
            DayStatus::Weekend
        } else if self.is_non_teaching {
            DayStatus::NonTeaching
        } else {
            DayStatus::Teaching
        }
    }

    /// 标志位是否满足互斥/互补不变量
    pub fn is_consistent(&self) -> bool {
        if self.is_weekend {
            !self.is_teaching_day && !self.is_non_teaching
        } else {
            self.is_teaching_day != self.is_non_teaching
        }
    }
}
