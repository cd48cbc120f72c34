// ==========================================
// 车辆保养引擎 - 规则录入校验器
// ==========================================
// 职责: 在规则创建/编辑时校验类别与触发字段的一致性
// 引擎判定时不再校验,缺失字段只是关闭对应触发器
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::interval::{IntervalKind, ServiceInterval};

pub struct IntervalValidator;

impl IntervalValidator {
    /// 收集全部违规项（不在第一项处中止）
    pub fn violations(rule: &ServiceInterval) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();
        let mut push = |field: &str, reason: &str| {
            violations.push(ValidationViolation {
                interval_id: rule.id.clone(),
                field: field.to_string(),
                reason: reason.to_string(),
            });
        };

        if rule.name.trim().is_empty() {
            push("name", "must not be empty");
        }

        if rule.kind.uses_mileage() && !is_positive(rule.mileage_interval) {
            push("mileage_interval", "required and > 0 for mileage/composite rules");
        }

        if rule.kind.uses_time() && !is_positive(rule.time_interval_months) {
            push(
                "time_interval_months",
                "required and > 0 for time/composite rules",
            );
        }

        if rule.kind == IntervalKind::Seasonal && rule.season.is_none() {
            push("season", "required for seasonal rules");
        }

        if rule.kind == IntervalKind::Month {
            match rule.specific_month {
                Some(m) if m < 12 => {}
                Some(_) => push("specific_month", "must be within 0..=11"),
                None => push("specific_month", "required for month rules"),
            }
        }

        if rule.is_component_based {
            if rule.component_installation_type.is_none() {
                push(
                    "component_installation_type",
                    "required for component-based rules",
                );
            }
            if !is_positive(rule.total_life_mileage) {
                push(
                    "total_life_mileage",
                    "required and > 0 for component-based rules",
                );
            }
        }

        violations
    }

    /// 校验单条规则
    pub fn validate(rule: &ServiceInterval) -> ApiResult<()> {
        let violations = Self::violations(rule);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ApiError::from_violations(violations))
        }
    }

    /// 校验一组规则（同一车辆的规则 id 不得重复）
    pub fn validate_all(rules: &[ServiceInterval]) -> ApiResult<()> {
        let mut violations: Vec<ValidationViolation> =
            rules.iter().flat_map(Self::violations).collect();

        for (idx, rule) in rules.iter().enumerate() {
            if rules[..idx].iter().any(|r| r.id == rule.id) {
                violations.push(ValidationViolation {
                    interval_id: rule.id.clone(),
                    field: "id".to_string(),
                    reason: "duplicate interval id".to_string(),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ApiError::from_violations(violations))
        }
    }
}

fn is_positive(value: Option<u32>) -> bool {
    value.map_or(false, |v| v > 0)
}
