// ==========================================
// 学期教学计划日历 - 引擎层
// ==========================================
// 职责: 日历派生与只读汇总,不持有状态
// 红线: 引擎为纯函数,状态只由 store 持有
// ==========================================

pub mod calendar_derivation;
pub mod calendar_summary;

// 重导出核心引擎
pub use calendar_derivation::{derive_days, CalendarDerivationEngine};
pub use calendar_summary::{CalendarSummary, UnitCoverage, TEACHING_DAYS_PER_WEEK};
