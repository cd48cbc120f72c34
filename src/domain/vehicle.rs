// ==========================================
// 车辆保养引擎 - 车辆实体
// ==========================================
// 红线: current_mileage >= 0 (由无符号类型保证)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::interval::ServiceInterval;
use crate::domain::types::VehicleType;

/// 车辆快照（存储层提供，引擎只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,

    #[serde(default, rename = "type")]
    pub vehicle_type: VehicleType,

    /// 最近一次录入的里程表读数
    pub current_mileage: u32,

    /// 年行驶里程估计（缺失或 <= 0 时不做推算）
    #[serde(default)]
    pub estimated_annual_mileage: Option<i64>,

    pub created_at: DateTime<Utc>,

    /// 里程最后更新时间
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub service_intervals: Vec<ServiceInterval>,
}

impl Vehicle {
    /// 有效的日均里程（仅当年里程估计 > 0）
    pub fn daily_rate(&self) -> Option<f64> {
        match self.estimated_annual_mileage {
            Some(annual) if annual > 0 => Some(annual as f64 / 365.0),
            _ => None,
        }
    }
}
