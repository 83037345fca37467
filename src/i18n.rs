// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库，语言文件位于 locales/
// 日状态图例、启动提示等用户可见文本经由此模块翻译
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 3] = ["zh-CN", "en", "es"];

/// 是否为支持的语言代码
pub fn is_supported_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale.trim())
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 返回
/// - true: 已切换
/// - false: 不支持的语言，保持当前语言
pub fn set_locale(locale: &str) -> bool {
    let locale = locale.trim();
    if !is_supported_locale(locale) {
        tracing::warn!(locale, current = %current_locale(), "不支持的语言，忽略切换");
        return false;
    }
    rust_i18n::set_locale(locale);
    true
}

/// 翻译消息
///
/// # 示例
/// ```no_run
/// use term_planner::i18n::t;
/// let label = t("day_status.weekend");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息并替换 %{name} 占位符
///
/// # 示例
/// ```no_run
/// use term_planner::i18n::t_with_args;
/// let msg = t_with_args("planning.loaded", &[("days", "289")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |msg, (name, value)| {
        msg.replace(&format!("%{{{}}}", name), value)
    })
}
