// ==========================================
// 学期教学计划日历 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、日期归一化规则
// 红线: 不含状态管理逻辑,不含派生引擎逻辑
// ==========================================

pub mod calendar_date;
pub mod calendar_day;
pub mod error;
pub mod planning;
pub mod school_calendar;
pub mod teaching_unit;
pub mod types;

// 重导出核心类型
pub use calendar_date::{calendar_day_in, CalendarDate};
pub use calendar_day::CalendarDay;
pub use error::{DomainError, DomainResult};
pub use planning::{PlanningConfiguration, WeeklySchedule};
pub use school_calendar::SchoolCalendar;
pub use teaching_unit::TeachingUnit;
pub use types::{is_weekend, DayStatus, WEEKEND_DAYS};
