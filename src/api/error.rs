// ==========================================
// 学期教学计划日历 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换领域错误为用户可读的错误消息
// ==========================================

use crate::domain::DomainError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 状态错误
    // ==========================================
    /// 需要已加载计划的操作在未加载时调用
    #[error("尚未加载教学计划")]
    PlanningNotLoaded,

    /// 计划仓库锁失效（持锁线程 panic），立即失败而不是返回陈旧数据
    #[error("计划仓库不可用: {0}")]
    StoreUnavailable(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidInput(format!("JSON解析失败: {}", err))
    }
}

impl ApiError {
    /// 错误代码（返回给前端）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::PlanningNotLoaded => "PLANNING_NOT_LOADED",
            ApiError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_domain_error_conversion() {
        let err = DomainError::InvalidUnitRange {
            unit_id: "U1".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        };
        let api_err: ApiError = err.into();
        match api_err {
            ApiError::ValidationError(msg) => {
                assert!(msg.contains("U1"));
                assert!(msg.contains("2024-12-20"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let api_err: ApiError = json_err.into();
        assert_eq!(api_err.code(), "INVALID_INPUT");
        assert!(api_err.to_string().contains("JSON解析失败"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(ApiError::PlanningNotLoaded.code(), "PLANNING_NOT_LOADED");
        assert_eq!(
            ApiError::StoreUnavailable("poisoned".to_string()).code(),
            "STORE_UNAVAILABLE"
        );
    }
}
