// ==========================================
// 车辆保养引擎 - 全车队汇总
// ==========================================
// 职责: 对每辆车的每条规则调用 RuleEvaluator,合并后全局排序
// 红线: 不丢弃任何待办项（过滤属于展示层）
// ==========================================

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::config::EnginePolicy;
use crate::domain::action_item::ActionItem;
use crate::domain::maintenance_log::MaintenanceLog;
use crate::domain::vehicle::Vehicle;
use crate::engine::action_sorter::ActionSorter;
use crate::engine::mileage_projector::MileageProjector;
use crate::engine::rule_evaluator::RuleEvaluator;

pub struct ActionAggregator {
    evaluator: RuleEvaluator,
    sorter: ActionSorter,
    projector: MileageProjector,
}

impl ActionAggregator {
    pub fn new() -> Self {
        Self::with_policy(EnginePolicy::default())
    }

    pub fn with_policy(policy: EnginePolicy) -> Self {
        let sorter = ActionSorter::new(policy.missing_days_sort_key);
        Self {
            evaluator: RuleEvaluator::with_policy(policy),
            sorter,
            projector: MileageProjector::new(),
        }
    }

    /// 单车全部规则（未排序）
    pub fn evaluate_vehicle(
        &self,
        vehicle: &Vehicle,
        logs: &[MaintenanceLog],
        now: DateTime<Utc>,
    ) -> Vec<ActionItem> {
        // 同一轮判定内每车只推算一次里程
        let projected = self.projector.project(vehicle, now);

        vehicle
            .service_intervals
            .iter()
            .map(|rule| {
                self.evaluator
                    .evaluate_projected(vehicle, rule, logs, now, projected)
            })
            .collect()
    }

    /// 全车队待办项,按全局优先级排序
    ///
    /// `logs_by_vehicle` 中缺失的车辆视为无保养历史
    #[instrument(skip_all, fields(vehicles = vehicles.len()))]
    pub fn aggregate(
        &self,
        vehicles: &[Vehicle],
        logs_by_vehicle: &HashMap<String, Vec<MaintenanceLog>>,
        now: DateTime<Utc>,
    ) -> Vec<ActionItem> {
        let mut items = Vec::new();

        for vehicle in vehicles {
            let logs = logs_by_vehicle
                .get(&vehicle.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            items.extend(self.evaluate_vehicle(vehicle, logs, now));
        }

        let items = self.sorter.sort(items);
        tracing::debug!(items = items.len(), "待办项汇总完成");
        items
    }
}

impl Default for ActionAggregator {
    fn default() -> Self {
        Self::new()
    }
}
