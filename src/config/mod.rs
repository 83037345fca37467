// ==========================================
// 学期教学计划日历 - 配置层
// ==========================================
// 职责: 启动配置（环境变量 + 默认目录）与计划文件读写
// 说明: 计划文件只在壳层启动时读取，核心不做持久化
// ==========================================

pub mod app_config;
pub mod error;
pub mod planning_file;

// 重导出
pub use app_config::{config_keys, default_planning_path, AppConfig, DEFAULT_LOCALE};
pub use error::{ConfigError, ConfigResult};
pub use planning_file::{load_planning_file, save_planning_file};
