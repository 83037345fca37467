use crate::api::dto::{CalendarDayView, PlanningConfigurationDto};
use crate::app::state::AppState;
use crate::store::ToggleOutcome;

use super::common::{
    emit_frontend_event, map_api_error, parse_date, to_json, PLANNING_UPDATED_EVENT,
};

// ==========================================
// 教学计划相关命令
// ==========================================

/// 加载教学计划（全量替换，丢弃人工切换）
///
/// # 参数
/// - planning_json: 计划配置 JSON（camelCase，见 PlanningConfigurationDto）
///
/// # 返回
/// - 成功: 日历状态计数 JSON
/// - 失败: 错误JSON
#[tauri::command(rename_all = "snake_case")]
pub fn load_planning(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    planning_json: String,
) -> Result<String, String> {
    let summary = state
        .planning_api
        .load_from_json(&planning_json)
        .map_err(map_api_error)?;

    emit_frontend_event(
        &app,
        PLANNING_UPDATED_EVENT,
        serde_json::json!({ "reason": "load" }),
    );

    to_json(&summary)
}

/// 查询当前计划配置
///
/// # 返回
/// - 已加载: 计划配置 JSON
/// - 未加载: "null"
#[tauri::command(rename_all = "snake_case")]
pub fn get_planning(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let config = state
        .planning_api
        .get_configuration()
        .map_err(map_api_error)?;

    to_json(&config.as_ref().map(PlanningConfigurationDto::from))
}

/// 查询当前日历日序列（未加载时为空数组）
#[tauri::command(rename_all = "snake_case")]
pub fn list_calendar_days(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let days: Vec<CalendarDayView> = state
        .planning_api
        .list_day_views()
        .map_err(map_api_error)?;

    to_json(&days)
}

/// 切换某日教学状态
///
/// # 参数
/// - date: 日期 (YYYY-MM-DD，允许带时间，时间部分忽略)
///
/// # 返回
/// - {"outcome": "TOGGLED", "day": {...}} 或 WEEKEND_IGNORED / OUT_OF_RANGE / NOT_LOADED
#[tauri::command(rename_all = "snake_case")]
pub fn toggle_calendar_day(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    date: String,
) -> Result<String, String> {
    let date = parse_date(&date)?;
    let outcome = state
        .planning_api
        .toggle_day(date)
        .map_err(map_api_error)?;

    if let ToggleOutcome::Toggled(day) = &outcome {
        emit_frontend_event(
            &app,
            PLANNING_UPDATED_EVENT,
            serde_json::json!({
                "reason": "toggle",
                "day": CalendarDayView::from(day),
            }),
        );
    }

    to_json(&outcome)
}

/// 查询日历状态计数
#[tauri::command(rename_all = "snake_case")]
pub fn get_calendar_summary(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let summary = state.planning_api.get_summary().map_err(map_api_error)?;
    to_json(&summary)
}

/// 查询各教学单元覆盖情况
#[tauri::command(rename_all = "snake_case")]
pub fn get_unit_coverage(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let coverage = state
        .planning_api
        .get_unit_coverage()
        .map_err(map_api_error)?;
    to_json(&coverage)
}
