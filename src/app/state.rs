// ==========================================
// 学期教学计划日历 - 应用状态
// ==========================================
// 职责: 启动时创建一次、由壳层持有的应用状态
// 说明: 不使用全局单例，视图通过 AppState 显式获得 PlanningApi
// ==========================================

use std::sync::Arc;

use crate::api::PlanningApi;
use crate::config::{load_planning_file, AppConfig};
use crate::engine::CalendarSummary;

/// 应用状态
///
/// 在Tauri应用中作为托管状态（manage）注入命令
pub struct AppState {
    /// 启动配置
    pub config: AppConfig,

    /// 计划API（唯一持有计划仓库）
    pub planning_api: Arc<PlanningApi>,
}

impl AppState {
    /// 创建新的AppState实例（计划未加载）
    pub fn new(config: AppConfig) -> Self {
        crate::i18n::set_locale(&config.locale);

        Self {
            config,
            planning_api: Arc::new(PlanningApi::new()),
        }
    }

    /// 创建AppState并尝试加载计划文件
    ///
    /// # 说明
    /// - 文件不存在: 保持未加载状态，由前端后续调用 load_planning
    /// - 文件无效: 记录警告并保持未加载状态，不阻塞启动
    pub fn bootstrap(config: AppConfig) -> Self {
        let state = Self::new(config);

        if !state.config.has_planning_file() {
            tracing::info!(
                "{}",
                crate::i18n::t_with_args(
                    "planning.file_not_found",
                    &[("path", &state.config.planning_path.display().to_string())],
                )
            );
            return state;
        }

        match load_planning_file(&state.config.planning_path) {
            Ok(planning) => match state.planning_api.load_configuration(planning) {
                Ok(summary) => log_loaded(&summary),
                Err(e) => tracing::warn!("启动时加载计划失败(将以未加载状态启动): {}", e),
            },
            Err(e) => tracing::warn!("启动时读取计划文件失败(将以未加载状态启动): {}", e),
        }

        state
    }
}

fn log_loaded(summary: &CalendarSummary) {
    tracing::info!(
        teaching_days = summary.teaching_days,
        non_teaching_days = summary.non_teaching_days,
        weekend_days = summary.weekend_days,
        "{}",
        crate::i18n::t_with_args("planning.loaded", &[("days", &summary.total_days.to_string())])
    );
}
