// ==========================================
// 车辆保养引擎 - API层错误类型
// ==========================================
// 职责: 调用方关注的错误（规则录入校验、配置、快照读取）
// 红线: 引擎判定本身不返回错误,错误只出现在引擎边界之外
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 规则录入错误
    // ==========================================
    #[error("无效的保养规则 (interval_id={interval_id}): {reason}")]
    InvalidInterval { interval_id: String, reason: String },

    /// 规则校验失败（带全部违规项）
    #[error("规则校验失败: {} 项违规", violations.len())]
    ValidationFailed { violations: Vec<ValidationViolation> },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 配置 / 快照错误
    // ==========================================
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("快照解析失败: {0}")]
    SnapshotParse(#[from] serde_json::Error),

    #[error("快照读取失败: {0}")]
    SnapshotIo(#[from] std::io::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    pub interval_id: String,
    /// 违规字段
    pub field: String,
    pub reason: String,
}

impl ApiError {
    /// 违规列表转换为错误;只有一项时使用 InvalidInterval
    pub fn from_violations(mut violations: Vec<ValidationViolation>) -> Self {
        if violations.len() == 1 {
            let v = violations.remove(0);
            return ApiError::InvalidInterval {
                interval_id: v.interval_id,
                reason: format!("{}: {}", v.field, v.reason),
            };
        }
        ApiError::ValidationFailed { violations }
    }
}
