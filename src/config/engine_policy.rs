use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// 引擎判定阈值
///
/// 默认值与历史硬编码行为逐位一致;部分 JSON 只覆盖其携带的键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    /// 剩余里程低于该值判定为即将到期
    pub due_soon_miles: i64,

    /// 剩余天数低于该值判定为即将到期
    pub due_soon_days: i64,

    /// 当季提醒的抑制窗口（月）: 最近 N 个月内做过则不强制提醒
    pub seasonal_suppression_months: u32,

    /// 进度条用的每月天数
    pub days_per_month_estimate: u32,

    /// 全局排序时无剩余天数项的排序键
    pub missing_days_sort_key: i64,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            due_soon_miles: 500,
            due_soon_days: 30,
            seasonal_suppression_months: 6,
            days_per_month_estimate: 30,
            missing_days_sort_key: 9999,
        }
    }
}

impl EnginePolicy {
    /// 校验阈值取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.due_soon_miles < 0 {
            return Err(ConfigError::InvalidValue {
                key: "due_soon_miles".to_string(),
                message: format!("must be >= 0, got {}", self.due_soon_miles),
            });
        }
        if self.due_soon_days <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "due_soon_days".to_string(),
                message: format!("must be > 0, got {}", self.due_soon_days),
            });
        }
        if self.days_per_month_estimate == 0 {
            return Err(ConfigError::InvalidValue {
                key: "days_per_month_estimate".to_string(),
                message: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_legacy_constants() {
        let policy = EnginePolicy::default();
        assert_eq!(policy.due_soon_miles, 500);
        assert_eq!(policy.due_soon_days, 30);
        assert_eq!(policy.seasonal_suppression_months, 6);
        assert_eq!(policy.missing_days_sort_key, 9999);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_given_keys() {
        let policy: EnginePolicy = serde_json::from_str(r#"{"due_soon_miles": 1000}"#).unwrap();
        assert_eq!(policy.due_soon_miles, 1000);
        assert_eq!(policy.due_soon_days, 30);
    }

    #[test]
    fn test_zero_days_rejected() {
        let policy = EnginePolicy {
            due_soon_days: 0,
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "due_soon_days"
        ));
    }
}
