// ==========================================
// 车辆保养引擎 - 默认规则目录
// ==========================================
// 车辆未配置任何规则时,由调用方按车辆类别替换为默认规则
// 引擎本身不感知车辆类别
// ==========================================

use crate::domain::interval::ServiceInterval;
use crate::domain::types::{Season, VehicleType};
use crate::domain::vehicle::Vehicle;

pub struct DefaultRuleCatalog;

impl DefaultRuleCatalog {
    /// 按车辆类别返回默认规则
    pub fn for_vehicle_type(vehicle_type: VehicleType) -> Vec<ServiceInterval> {
        match vehicle_type {
            VehicleType::Mower => vec![
                ServiceInterval::seasonal("default-oil", "Oil Change", Season::Spring)
                    .with_notes("Change oil before the mowing season"),
                ServiceInterval::seasonal("default-winterize", "Winterize", Season::Fall)
                    .with_notes("Stabilize fuel, clean deck, store battery"),
            ],
            VehicleType::Snowblower => vec![
                ServiceInterval::seasonal("default-oil", "Oil Change", Season::Fall)
                    .with_notes("Change oil before the snow season"),
                ServiceInterval::seasonal("default-summerize", "Summerize", Season::Spring)
                    .with_notes("Drain or stabilize fuel before storage"),
            ],
            _ => vec![
                ServiceInterval::composite("default-oil", "Oil Change", 5000, 6)
                    .with_notes("Regular oil and filter change"),
                ServiceInterval::mileage("default-tire", "Tire Rotation", 6000)
                    .with_notes("Rotate tires to ensure even wear"),
                ServiceInterval::seasonal("default-winter", "Winterize", Season::Fall)
                    .with_notes("Check antifreeze, battery, tires for winter"),
                ServiceInterval::seasonal("default-summer", "Summer Prep", Season::Spring)
                    .with_notes("Check A/C, coolant, summer tires"),
            ],
        }
    }

    /// 无自定义规则时替换为默认规则,否则原样返回
    pub fn with_defaults(vehicle: &Vehicle) -> Vehicle {
        if !vehicle.service_intervals.is_empty() {
            return vehicle.clone();
        }

        tracing::debug!(
            vehicle_id = %vehicle.id,
            vehicle_type = %vehicle.vehicle_type,
            "车辆未配置规则,使用默认规则"
        );

        Vehicle {
            service_intervals: Self::for_vehicle_type(vehicle.vehicle_type),
            ..vehicle.clone()
        }
    }
}
