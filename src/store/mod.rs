// ==========================================
// 学期教学计划日历 - 状态仓库层
// ==========================================
// 职责: 唯一持有计划配置与派生日历（单一数据源）
// 红线: 不做持久化，不做跨线程同步（由 api 层串行化）
// ==========================================

pub mod planning_store;

// 重导出
pub use planning_store::{LoadedPlanning, PlanningState, PlanningStore, ToggleOutcome};
