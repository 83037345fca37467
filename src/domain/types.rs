// ==========================================
// 学期教学计划日历 - 领域类型定义
// ==========================================
// 职责: 日状态分类、固定周末规则
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 周末规则 (Weekend Rule)
// ==========================================
// 红线: 周末由星期几唯一决定,不可配置,不可切换
pub const WEEKEND_DAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// 判断日期是否为周末
pub fn is_weekend(date: NaiveDate) -> bool {
    WEEKEND_DAYS.contains(&date.weekday())
}

// ==========================================
// 日状态 (Day Status)
// ==========================================
// 三类互斥: 教学日 / 非教学日 / 周末
// 序列化格式: SCREAMING_SNAKE_CASE (与前端一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    Teaching,    // 教学日
    NonTeaching, // 非教学日(节假日)
    Weekend,     // 周末
}

impl DayStatus {
    /// 全部状态（图例顺序）
    pub const ALL: [DayStatus; 3] = [DayStatus::Teaching, DayStatus::NonTeaching, DayStatus::Weekend];

    /// i18n 键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DayStatus::Teaching => "day_status.teaching",
            DayStatus::NonTeaching => "day_status.non_teaching",
            DayStatus::Weekend => "day_status.weekend",
        }
    }

    /// 当前语言下的显示名称（图例用）
    pub fn label(&self) -> String {
        crate::i18n::t(self.i18n_key())
    }

    /// 是否允许人工切换
    pub fn is_toggleable(&self) -> bool {
        !matches!(self, DayStatus::Weekend)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Teaching => write!(f, "TEACHING"),
            DayStatus::NonTeaching => write!(f, "NON_TEACHING"),
            DayStatus::Weekend => write!(f, "WEEKEND"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_weekend() {
        // 2024-09-14 周六, 2024-09-15 周日, 2024-09-16 周一
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 9, 14).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 9, 16).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 9, 20).unwrap()));
    }

    #[test]
    fn test_day_status_display_and_serde() {
        assert_eq!(DayStatus::NonTeaching.to_string(), "NON_TEACHING");
        let json = serde_json::to_string(&DayStatus::Weekend).unwrap();
        assert_eq!(json, "\"WEEKEND\"");
        let status: DayStatus = serde_json::from_str("\"TEACHING\"").unwrap();
        assert_eq!(status, DayStatus::Teaching);
    }

    #[test]
    fn test_toggleable() {
        assert!(DayStatus::Teaching.is_toggleable());
        assert!(DayStatus::NonTeaching.is_toggleable());
        assert!(!DayStatus::Weekend.is_toggleable());
    }
}
