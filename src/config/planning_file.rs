// ==========================================
// 学期教学计划日历 - 计划文件读取
// ==========================================
// 职责: 从 JSON 文件读取计划配置（壳层启动时使用）
// 格式: 与前端一致的 camelCase 结构，见 api::dto
// ==========================================

use std::path::Path;

use crate::api::dto::PlanningConfigurationDto;
use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::PlanningConfiguration;

/// 读取并校验计划文件
///
/// # 返回
/// - Err(FileNotFound): 文件不存在
/// - Err(Io): 读取失败
/// - Err(InvalidPlanning): JSON 结构或字段校验失败
pub fn load_planning_file(path: impl AsRef<Path>) -> ConfigResult<PlanningConfiguration> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |message: String| ConfigError::InvalidPlanning {
        path: path.to_path_buf(),
        message,
    };

    let dto = PlanningConfigurationDto::from_json(&raw).map_err(|e| invalid(e.to_string()))?;
    let config = PlanningConfiguration::try_from(dto).map_err(|e| invalid(e.to_string()))?;

    tracing::info!(
        path = %path.display(),
        units = config.teaching_units().len(),
        "计划文件已读取"
    );
    Ok(config)
}

/// 将计划配置写入 JSON 文件（格式与读取一致）
pub fn save_planning_file(path: impl AsRef<Path>, config: &PlanningConfiguration) -> ConfigResult<()> {
    let path = path.as_ref();
    let dto = PlanningConfigurationDto::from(config);
    let json = serde_json::to_string_pretty(&dto).map_err(|e| ConfigError::InvalidPlanning {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
