// ==========================================
// 车辆保养引擎 - 保养待办 API
// ==========================================
// 职责: 封装 ActionAggregator,补齐调用方职责
// - 无规则车辆替换为默认规则
// - 快照读取
// - 读模型分组（三段/采购清单/时间线/摘要）
// 架构: API 层 → Engine 层（纯函数）
// ==========================================

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::config::EnginePolicy;
use crate::domain::action_item::ActionItem;
use crate::domain::maintenance_log::MaintenanceLog;
use crate::domain::vehicle::Vehicle;
use crate::engine::aggregator::ActionAggregator;
use crate::engine::default_rules::DefaultRuleCatalog;
use crate::engine::schedule_view::{
    ScheduleBuckets, ScheduleView, ServiceSummary, SupplyGroup, TimelineGroup,
};

// ==========================================
// FleetSnapshot - 存储快照
// ==========================================

/// 一次判定所需的全部只读数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,

    /// 车辆ID → 保养日志（缺失视为无历史）
    #[serde(default)]
    pub logs: HashMap<String, Vec<MaintenanceLog>>,
}

impl FleetSnapshot {
    /// 从 JSON 文件读取快照
    pub fn load_file(path: &Path) -> ApiResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn logs_for(&self, vehicle_id: &str) -> &[MaintenanceLog] {
        self.logs.get(vehicle_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ==========================================
// MaintenanceApi
// ==========================================

pub struct MaintenanceApi {
    aggregator: ActionAggregator,
}

impl MaintenanceApi {
    pub fn new() -> Self {
        Self::with_policy(EnginePolicy::default())
    }

    pub fn with_policy(policy: EnginePolicy) -> Self {
        Self {
            aggregator: ActionAggregator::with_policy(policy),
        }
    }

    /// 全车队待办项（已替换默认规则,全局排序）
    #[instrument(skip_all, fields(vehicles = snapshot.vehicles.len()))]
    pub fn action_items(&self, snapshot: &FleetSnapshot, now: DateTime<Utc>) -> Vec<ActionItem> {
        let vehicles: Vec<Vehicle> = snapshot
            .vehicles
            .iter()
            .map(DefaultRuleCatalog::with_defaults)
            .collect();

        self.aggregator.aggregate(&vehicles, &snapshot.logs, now)
    }

    /// 单车待办项（车辆详情页）
    ///
    /// 返回顺序与规则顺序一致,不做全局排序
    pub fn vehicle_items(
        &self,
        snapshot: &FleetSnapshot,
        vehicle_id: &str,
        now: DateTime<Utc>,
    ) -> ApiResult<Vec<ActionItem>> {
        let vehicle = self.find_vehicle(snapshot, vehicle_id)?;
        let vehicle = DefaultRuleCatalog::with_defaults(vehicle);
        Ok(self
            .aggregator
            .evaluate_vehicle(&vehicle, snapshot.logs_for(vehicle_id), now))
    }

    /// 单车保养摘要
    pub fn vehicle_summary(
        &self,
        snapshot: &FleetSnapshot,
        vehicle_id: &str,
        now: DateTime<Utc>,
    ) -> ApiResult<ServiceSummary> {
        let vehicle = self.find_vehicle(snapshot, vehicle_id)?;
        Ok(ServiceSummary::compute(
            snapshot.logs_for(vehicle_id),
            vehicle.current_mileage,
            now,
        ))
    }

    // ==========================================
    // 读模型分组
    // ==========================================

    pub fn schedule(&self, snapshot: &FleetSnapshot, now: DateTime<Utc>) -> ScheduleBuckets {
        ScheduleView::bucket(&self.action_items(snapshot, now))
    }

    pub fn supply_list(&self, snapshot: &FleetSnapshot, now: DateTime<Utc>) -> Vec<SupplyGroup> {
        ScheduleView::supply_list(&self.action_items(snapshot, now))
    }

    pub fn timeline(&self, snapshot: &FleetSnapshot, now: DateTime<Utc>) -> Vec<TimelineGroup> {
        ScheduleView::timeline(&self.action_items(snapshot, now))
    }

    fn find_vehicle<'a>(
        &self,
        snapshot: &'a FleetSnapshot,
        vehicle_id: &str,
    ) -> ApiResult<&'a Vehicle> {
        snapshot
            .vehicles
            .iter()
            .find(|v| v.id == vehicle_id)
            .ok_or_else(|| ApiError::InvalidInput(format!("车辆不存在: {}", vehicle_id)))
    }
}

impl Default for MaintenanceApi {
    fn default() -> Self {
        Self::new()
    }
}
