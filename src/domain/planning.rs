// ==========================================
// 学期教学计划日历 - 教学计划配置
// ==========================================
// 职责: 一次完整加载的计划配置（教学单元 + 学年日历 + 课表）
// ==========================================

use chrono::Weekday;
use serde::Serialize;
use std::collections::HashSet;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::school_calendar::SchoolCalendar;
use crate::domain::teaching_unit::TeachingUnit;

// ==========================================
// WeeklySchedule - 周课表
// ==========================================
// 说明: 仅作为透传数据保留给展示层，
// 派生与切换逻辑均不读取该结构。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySchedule {
    pub weekdays: Vec<Weekday>, // 上课的星期
    pub hours_per_day: f64,     // 每日课时
}

impl Default for WeeklySchedule {
    /// 周一至周五，课时未设定
    fn default() -> Self {
        Self {
            weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            hours_per_day: 0.0,
        }
    }
}

// ==========================================
// PlanningConfiguration - 计划配置
// ==========================================
// 字段私有: 只能经 new() 构造，保证教学单元ID唯一
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanningConfiguration {
    teaching_units: Vec<TeachingUnit>,
    school_calendar: SchoolCalendar,
    weekly_schedule: WeeklySchedule,
}

impl PlanningConfiguration {
    /// 创建计划配置
    ///
    /// # 返回
    /// - Err(DuplicateUnitId): 教学单元ID重复
    pub fn new(
        teaching_units: Vec<TeachingUnit>,
        school_calendar: SchoolCalendar,
        weekly_schedule: WeeklySchedule,
    ) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for unit in &teaching_units {
            if !seen.insert(unit.id()) {
                return Err(DomainError::DuplicateUnitId(unit.id().to_string()));
            }
        }

        Ok(Self {
            teaching_units,
            school_calendar,
            weekly_schedule,
        })
    }

    // ===== Getters =====

    pub fn teaching_units(&self) -> &[TeachingUnit] {
        &self.teaching_units
    }

    pub fn school_calendar(&self) -> &SchoolCalendar {
        &self.school_calendar
    }

    pub fn weekly_schedule(&self) -> &WeeklySchedule {
        &self.weekly_schedule
    }
}
