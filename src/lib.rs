// ==========================================
// 学期教学计划日历 - 核心库
// ==========================================
// 职责: 教学日派生与切换（日历核心）+ 计划状态仓库
// 技术栈: Tauri + Rust
// 系统定位: 展示层只通过 api/store 读取与修改计划
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 日历派生
pub mod engine;

// 状态层 - 计划状态仓库
pub mod store;

// 配置层 - 启动配置与计划文件
pub mod config;

// 日志系统
pub mod logging;

// 性能日志
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 视图接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CalendarDate, CalendarDay, DayStatus, PlanningConfiguration, SchoolCalendar, TeachingUnit,
    WeeklySchedule,
};

// 引擎
pub use engine::{derive_days, CalendarDerivationEngine, CalendarSummary, UnitCoverage};

// 状态仓库
pub use store::{PlanningState, PlanningStore, ToggleOutcome};

// API
pub use api::{ApiError, PlanningApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "学期教学计划日历";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
