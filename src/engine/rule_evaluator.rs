// ==========================================
// 车辆保养引擎 - 规则判定引擎
// ==========================================
// 职责: 单车单规则 → 一条待办项
// 输入: Vehicle + ServiceInterval + 保养日志 + now
// 输出: ActionItem (status + reason + 到期数据)
// 红线: 永远输出一条待办项,缺失字段只关闭对应触发器,不报错
// ==========================================
//
// 判定顺序:
// 1) 基准: 最近一条匹配日志(两级匹配),部件规则另取安装日志作寿命基准
// 2) 推算当前里程
// 3) 逐个触发器计算: 里程 / 寿命 / 时间 / 指定月份
// 4) 季节触发器: 当季且距上次服务超过抑制窗口 → 直接 due_soon 并返回
// 5) 合并标志: 超期 > 即将到期 > 未到期
// ==========================================

mod reason;
mod triggers;


use chrono::{DateTime, Months, Utc};

use crate::config::EnginePolicy;
use crate::domain::action_item::{ActionItem, LastLogSnapshot};
use crate::domain::interval::ServiceInterval;
use crate::domain::maintenance_log::MaintenanceLog;
use crate::domain::types::{Season, ServiceStatus};
use crate::domain::vehicle::Vehicle;
use crate::engine::log_matcher::LogMatcher;
use crate::engine::mileage_projector::MileageProjector;

use triggers::TriggerSignals;

// ==========================================
// RuleEvaluator - 规则判定引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct RuleEvaluator {
    policy: EnginePolicy,
    projector: MileageProjector,
}

impl RuleEvaluator {
    /// 使用默认阈值
    pub fn new() -> Self {
        Self::with_policy(EnginePolicy::default())
    }

    pub fn with_policy(policy: EnginePolicy) -> Self {
        Self {
            policy,
            projector: MileageProjector::new(),
        }
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 判定单条规则
    pub fn evaluate(
        &self,
        vehicle: &Vehicle,
        rule: &ServiceInterval,
        logs: &[MaintenanceLog],
        now: DateTime<Utc>,
    ) -> ActionItem {
        let projected = self.projector.project(vehicle, now);
        self.evaluate_projected(vehicle, rule, logs, now, projected)
    }

    /// 判定单条规则（推算里程已由调用方按车计算）
    pub fn evaluate_projected(
        &self,
        vehicle: &Vehicle,
        rule: &ServiceInterval,
        logs: &[MaintenanceLog],
        now: DateTime<Utc>,
        projected_mileage: i64,
    ) -> ActionItem {
        let triggers = rule.triggers();
        if triggers.is_empty() {
            tracing::warn!(
                vehicle_id = %vehicle.id,
                interval_id = %rule.id,
                kind = %rule.kind,
                "规则缺少触发字段,不产生到期信号"
            );
        }

        // 1. 基准
        let baselines = LogMatcher::resolve(vehicle, rule, logs);

        // 2. 推算里程
        let is_projected = projected_mileage > i64::from(vehicle.current_mileage);

        // 3. 逐个触发器计算
        let mut signals = TriggerSignals::default();

        if let Some(interval) = triggers.mileage {
            signals.apply_mileage(interval, baselines.service.mileage, projected_mileage);
        }

        if let Some(life) = triggers.life {
            signals.apply_life(life.total_life_mileage, baselines.life.mileage, projected_mileage);
        }

        if let Some(remaining) = signals.remaining_miles {
            // 无历史日志时不把推算日期截断到车辆创建时间
            let floor = if baselines.service.from_log {
                baselines.service.date
            } else {
                now
            };
            signals.projected_date = self
                .projector
                .estimate_due_date(vehicle, remaining, now, floor);
        }

        if let Some(months) = triggers.time_months {
            signals.apply_time(
                months,
                baselines.service.date,
                now,
                self.policy.days_per_month_estimate,
            );
        }

        if let Some(month0) = triggers.month0 {
            signals.apply_month(month0, now);
        }

        let mut item = ActionItem {
            id: ActionItem::item_id(&vehicle.id, &rule.id),
            vehicle_id: vehicle.id.clone(),
            vehicle_name: vehicle.name.clone(),
            interval_id: rule.id.clone(),
            service_name: rule.name.clone(),
            status: ServiceStatus::Upcoming,
            reason: String::new(),
            due_date: signals.due_date,
            due_mileage: signals.due_mileage,
            remaining_miles: signals.remaining_miles,
            remaining_days: signals.remaining_days(),
            interval_miles: signals.interval_miles,
            interval_days: signals.interval_days,
            is_projected,
            projected_date: signals.projected_date,
            projected_mileage: is_projected.then_some(projected_mileage),
            is_optional: rule.is_optional,
            maintenance_type: rule.target_maintenance_type,
            last_log: baselines.last_service.map(LastLogSnapshot::from),
        };

        // 4. 季节触发器（优先,命中即返回）
        if let Some(season) = triggers.season {
            if self.is_season_pending(season, baselines.service.date, now) {
                item.status = ServiceStatus::DueSoon;
                item.reason = reason::with_optional_prefix(
                    reason::seasonal(season, &rule.name),
                    rule.is_optional,
                );
                tracing::debug!(
                    item_id = %item.id,
                    season = %season,
                    "当季保养未完成,强制 due_soon"
                );
                return item;
            }
        }

        // 5. 合并标志
        let flags = signals.flags(&self.policy);
        let status = flags.status();
        let text = reason::compose(status, &signals, &flags, triggers.season, now);

        item.status = status;
        item.reason = reason::with_optional_prefix(text, rule.is_optional);

        tracing::debug!(
            item_id = %item.id,
            status = %item.status,
            remaining_miles = ?item.remaining_miles,
            remaining_days = ?item.remaining_days,
            life_tightened = signals.life_tightened,
            "规则判定完成"
        );

        item
    }

    /// 当季且上次服务早于抑制窗口
    fn is_season_pending(
        &self,
        season: Season,
        last_service: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> bool {
        if !season.contains(now) {
            return false;
        }

        now.checked_sub_months(Months::new(self.policy.seasonal_suppression_months))
            .map_or(false, |cutoff| last_service < cutoff)
    }
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
