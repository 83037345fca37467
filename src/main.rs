// ==========================================
// 学期教学计划日历 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use term_planner::app::AppState;
use term_planner::config::AppConfig;

#[cfg(feature = "tauri-app")]
fn main() {
    use term_planner::app::tauri_commands::*;

    // 初始化日志系统
    term_planner::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", term_planner::APP_NAME);
    tracing::info!("系统版本: {}", term_planner::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    tracing::info!("计划文件路径: {}", config.planning_path.display());

    // 创建AppState（唯一持有计划仓库）
    let app_state = AppState::bootstrap(config);

    tracing::info!("启动Tauri应用...");

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 教学计划相关命令 (6个)
            // ==========================================
            load_planning,
            get_planning,
            list_calendar_days,
            toggle_calendar_day,
            get_calendar_summary,
            get_unit_coverage,

            // ==========================================
            // 语言与图例相关命令 (2个)
            // ==========================================
            get_day_status_labels,
            set_locale,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

/// 无 Tauri 时的命令行模式：读取计划文件并输出汇总
#[cfg(not(feature = "tauri-app"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    term_planner::logging::init();

    let mut config = AppConfig::from_env();
    if let Some(path) = std::env::args().nth(1) {
        config.planning_path = path.into();
    }

    // 先引导（设置语言并尝试加载计划），再输出标题
    let state = AppState::bootstrap(config);

    println!("==================================================");
    println!("{}", term_planner::i18n::t("app.name"));
    println!("系统版本: {}", term_planner::VERSION);
    println!("==================================================");
    if !state.planning_api.is_loaded()? {
        println!("{}", term_planner::i18n::t("planning.not_loaded"));
        println!();
        println!("用法: term-planner <planning.json>");
        println!("或设置环境变量 TERM_PLANNER_PLANNING_PATH");
        println!("图形界面需要启用 tauri-app 特性: cargo run --features tauri-app");
        return Ok(());
    }

    let summary = state.planning_api.get_summary()?;
    println!("{}", serde_json::to_string_pretty(&summary).context("序列化汇总失败")?);

    let coverage = state.planning_api.get_unit_coverage()?;
    println!("{}", serde_json::to_string_pretty(&coverage).context("序列化单元覆盖失败")?);

    Ok(())
}
