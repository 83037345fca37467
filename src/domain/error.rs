// ==========================================
// 学期教学计划日历 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("教学单元日期范围无效: unit_id={unit_id}, start={start}, end={end}")]
    InvalidUnitRange {
        unit_id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("教学单元ID不能为空")]
    EmptyUnitId,

    #[error("教学单元ID重复: {0}")]
    DuplicateUnitId(String),

    #[error("每周课时无效: unit_id={unit_id}, weekly_hours={weekly_hours}")]
    InvalidWeeklyHours { unit_id: String, weekly_hours: f64 },
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
