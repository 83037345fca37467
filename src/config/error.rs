// ==========================================
// 学期教学计划日历 - 配置层错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("计划文件不存在: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("计划文件读取失败 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("计划文件内容无效 ({}): {message}", .path.display())]
    InvalidPlanning { path: PathBuf, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
