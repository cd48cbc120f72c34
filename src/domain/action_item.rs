// ==========================================
// 车辆保养引擎 - 待办项 (Action Item)
// ==========================================
// 派生对象,每次计算重新生成,不持久化
// id = "<vehicle_id>-<interval_id>",便于前端列表 diff
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::maintenance_log::{MaintenanceDetails, MaintenanceLog};
use crate::domain::types::{MaintenanceType, ServiceStatus};

/// 单车单规则的到期提示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub interval_id: String,
    pub service_name: String,

    pub status: ServiceStatus,
    pub reason: String,

    pub due_date: Option<DateTime<Utc>>,
    pub due_mileage: Option<i64>,
    pub remaining_miles: Option<i64>,
    pub remaining_days: Option<i64>,

    /// 进度条分母（英里）
    pub interval_miles: Option<u32>,
    /// 进度条分母（天）
    pub interval_days: Option<u32>,

    pub is_projected: bool,
    pub projected_date: Option<DateTime<Utc>>,
    pub projected_mileage: Option<i64>,

    pub is_optional: bool,

    /// 规则的目标日志类别,供"记录本次保养"入口预填
    pub maintenance_type: Option<MaintenanceType>,

    pub last_log: Option<LastLogSnapshot>,
}

impl ActionItem {
    pub fn item_id(vehicle_id: &str, interval_id: &str) -> String {
        format!("{}-{}", vehicle_id, interval_id)
    }

    /// 下一次日期: 推算日期优先,否则按时间触发器的到期日
    pub fn next_date(&self) -> Option<DateTime<Utc>> {
        self.projected_date.or(self.due_date)
    }

    /// 全局排序的次键（无剩余天数时使用哨兵值）
    pub fn days_sort_key(&self, missing: i64) -> i64 {
        self.remaining_days.unwrap_or(missing)
    }
}

/// 最近一次匹配日志的快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastLogSnapshot {
    pub date: DateTime<Utc>,
    pub mileage: u32,
    pub shop: Option<String>,
    pub details: MaintenanceDetails,
}

impl From<&MaintenanceLog> for LastLogSnapshot {
    fn from(log: &MaintenanceLog) -> Self {
        Self {
            date: log.date,
            mileage: log.mileage,
            shop: log.shop.clone(),
            details: log.details.clone(),
        }
    }
}
