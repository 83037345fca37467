use crate::api::error::ApiError;
use crate::api::dto::parse_calendar_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tauri::Manager;

// ==========================================
// 公共工具：错误映射、日期解析、事件发送
// ==========================================

/// 计划变更事件名（前端订阅后重新拉取日历）
pub(super) const PLANNING_UPDATED_EVENT: &str = "planning-updated";

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选，当前语言的提示文本）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串（Tauri要求）
pub(super) fn map_api_error(err: ApiError) -> String {
    let details = match &err {
        ApiError::PlanningNotLoaded => Some(serde_json::json!({
            "hint": crate::i18n::t("planning.not_loaded"),
        })),
        _ => None,
    };

    let error_response = ErrorResponse {
        code: err.code().to_string(),
        message: err.to_string(),
        details,
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 解析日期字符串（归一化为日历日）
pub(super) fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(date_str).map_err(map_api_error)
}

/// 序列化返回值
pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}

/// 通知前端计划已变更（发送失败只记日志，不影响命令结果）
pub(super) fn emit_frontend_event(app: &tauri::AppHandle, event: &str, payload: serde_json::Value) {
    if let Err(e) = app.emit_all(event, payload) {
        tracing::warn!(event, error = %e, "前端事件发送失败");
    }
}
