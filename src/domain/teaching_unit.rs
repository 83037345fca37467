// ==========================================
// 学期教学计划日历 - 教学单元领域模型
// ==========================================
// 职责: 定义教学单元（按日期跨度展示的教学内容块）
// 红线: 创建后不可变，核心不提供单元编辑操作
// ==========================================

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::error::{DomainError, DomainResult};

// ==========================================
// TeachingUnit - 教学单元
// ==========================================
// 不变量: start_date <= end_date（闭区间）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeachingUnit {
    id: String,              // 单元ID（唯一，不透明字符串）
    name: String,            // 显示名称
    start_date: NaiveDate,   // 开始日期
    end_date: NaiveDate,     // 结束日期（含）
    weekly_hours: f64,       // 每周课时
    color: String,           // 显示颜色标记
}

impl TeachingUnit {
    /// 创建教学单元
    ///
    /// # 返回
    /// - Err(InvalidUnitRange): start_date > end_date
    /// - Err(EmptyUnitId): id 为空白
    /// - Err(InvalidWeeklyHours): 课时为负数或非有限值
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        weekly_hours: f64,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyUnitId);
        }
        if start_date > end_date {
            return Err(DomainError::InvalidUnitRange {
                unit_id: id,
                start: start_date,
                end: end_date,
            });
        }
        if !weekly_hours.is_finite() || weekly_hours < 0.0 {
            return Err(DomainError::InvalidWeeklyHours {
                unit_id: id,
                weekly_hours,
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            start_date,
            end_date,
            weekly_hours,
            color: color.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn weekly_hours(&self) -> f64 {
        self.weekly_hours
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
