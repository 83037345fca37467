// ==========================================
// 学期教学计划日历 - 应用配置
// ==========================================
// 职责: 启动参数（语言、计划文件路径）的读取与默认值
// 来源: 环境变量 > 用户数据目录默认值
// ==========================================

use std::path::PathBuf;

// ==========================================
// 配置键（环境变量）
// ==========================================
pub mod config_keys {
    /// 界面语言（zh-CN / en / es）
    pub const LOCALE: &str = "TERM_PLANNER_LOCALE";
    /// 计划配置文件路径（JSON）
    pub const PLANNING_PATH: &str = "TERM_PLANNER_PLANNING_PATH";
}

pub use crate::i18n::DEFAULT_LOCALE;

/// 默认计划文件名
pub const PLANNING_FILE_NAME: &str = "planning.json";

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 界面语言
    pub locale: String,

    /// 计划配置文件路径
    pub planning_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            planning_path: default_planning_path(),
        }
    }
}

impl AppConfig {
    /// 从环境变量读取配置，缺省项使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = lookup(config_keys::LOCALE)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .and_then(|v| {
                if crate::i18n::is_supported_locale(&v) {
                    Some(v)
                } else {
                    tracing::warn!("不支持的语言 {}，使用默认语言 {}", v, DEFAULT_LOCALE);
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let planning_path = lookup(config_keys::PLANNING_PATH)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_planning_path);

        Self {
            locale,
            planning_path,
        }
    }

    /// 计划文件是否存在
    pub fn has_planning_file(&self) -> bool {
        self.planning_path.is_file()
    }
}

/// 获取默认计划文件路径
///
/// # 返回
/// - 开发环境: 用户数据目录/term-planner-dev/planning.json
/// - 生产环境: 用户数据目录/term-planner/planning.json
/// - 无法获取用户数据目录时: ./planning.json
pub fn default_planning_path() -> PathBuf {
    let Some(data_dir) = dirs::data_dir() else {
        return PathBuf::from(".").join(PLANNING_FILE_NAME);
    };

    let app_dir = if cfg!(debug_assertions) {
        "term-planner-dev"
    } else {
        "term-planner"
    };

    data_dir.join(app_dir).join(PLANNING_FILE_NAME)
}
