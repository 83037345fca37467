use crate::api::dto::DayStatusLabel;

use super::common::to_json;

// ==========================================
// 语言与图例相关命令
// ==========================================

/// 查询日状态图例（当前语言）
#[tauri::command(rename_all = "snake_case")]
pub fn get_day_status_labels() -> Result<String, String> {
    to_json(&DayStatusLabel::legend())
}

/// 切换界面语言，返回新语言下的图例
///
/// # 参数
/// - locale: "zh-CN" / "en" / "es"
#[tauri::command(rename_all = "snake_case")]
pub fn set_locale(locale: String) -> Result<String, String> {
    if !crate::i18n::set_locale(&locale) {
        return Err(format!("不支持的语言: {}", locale.trim()));
    }
    to_json(&DayStatusLabel::legend())
}
