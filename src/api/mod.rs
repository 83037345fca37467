// ==========================================
// 学期教学计划日历 - API层
// ==========================================
// 职责: 视图/壳层调用入口，DTO 转换，错误映射
// ==========================================

pub mod dto;
pub mod error;
pub mod planning_api;

// 重导出
pub use dto::{
    CalendarDayView, ClassScheduleDto, DayStatusLabel, PlanningConfigurationDto,
    SchoolCalendarDto, TeachingUnitDto,
};
pub use error::{ApiError, ApiResult};
pub use planning_api::PlanningApi;
