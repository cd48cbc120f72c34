// ==========================================
// 车辆保养引擎 - 领域类型定义
// ==========================================
// 职责: 状态等级、季节、车辆类别、保养类别
// 红线: 状态是"等级制",不是评分制
// ==========================================

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 保养状态 (Service Status)
// ==========================================
// 顺序: Overdue < DueSoon < Upcoming (越小越紧急)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Overdue,  // 已超期
    DueSoon,  // 即将到期
    Upcoming, // 未到期
}

impl ServiceStatus {
    /// 全局排序使用的等级序号
    pub fn rank(self) -> u8 {
        match self {
            ServiceStatus::Overdue => 0,
            ServiceStatus::DueSoon => 1,
            ServiceStatus::Upcoming => 2,
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Overdue => write!(f, "overdue"),
            ServiceStatus::DueSoon => write!(f, "due_soon"),
            ServiceStatus::Upcoming => write!(f, "upcoming"),
        }
    }
}

// ==========================================
// 季节 (Season)
// ==========================================
// 北半球三个月窗口:
// spring=3-5月, summer=6-8月, fall=9-11月, winter=12-2月
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// 按月份(0-11)判定所属季节
    pub fn from_month0(month0: u32) -> Season {
        match month0 {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// 判断给定时刻是否落在本季节窗口内
    pub fn contains(self, at: DateTime<Utc>) -> bool {
        Season::from_month0(at.month0()) == self
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

// ==========================================
// 车辆类别 (Vehicle Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Truck,
    Motorcycle,
    Atv,
    Suv,
    Van,
    Mower,
    Snowblower,
    Boat,
    #[serde(other)]
    Other,
}

impl VehicleType {
    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
            VehicleType::Suv => "SUV",
            VehicleType::Van => "Van",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Mower => "Mower",
            VehicleType::Snowblower => "Snowblower",
            VehicleType::Boat => "Boat",
            VehicleType::Atv => "ATV/UTV",
            VehicleType::Other => "Other",
        }
    }

    /// 该类别是否记录里程（割草机/扫雪机不记录）
    pub fn tracks_mileage(self) -> bool {
        !matches!(self, VehicleType::Mower | VehicleType::Snowblower)
    }
}

impl Default for VehicleType {
    fn default() -> Self {
        VehicleType::Car
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==========================================
// 保养类别 (Maintenance Type)
// ==========================================
// 序列化格式: snake_case (与存储层一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    OilChange,
    TireRotation,
    TireReplacement,
    BrakePads,
    BrakeRotors,
    AirFilter,
    CabinFilter,
    SparkPlugs,
    TransmissionFluid,
    CoolantFlush,
    Battery,
    WiperBlades,
    Alignment,
    Inspection,
    #[serde(other)]
    Other,
}

impl MaintenanceType {
    /// 存储层使用的类别编码
    pub fn code(self) -> &'static str {
        match self {
            MaintenanceType::OilChange => "oil_change",
            MaintenanceType::TireRotation => "tire_rotation",
            MaintenanceType::TireReplacement => "tire_replacement",
            MaintenanceType::BrakePads => "brake_pads",
            MaintenanceType::BrakeRotors => "brake_rotors",
            MaintenanceType::AirFilter => "air_filter",
            MaintenanceType::CabinFilter => "cabin_filter",
            MaintenanceType::SparkPlugs => "spark_plugs",
            MaintenanceType::TransmissionFluid => "transmission_fluid",
            MaintenanceType::CoolantFlush => "coolant_flush",
            MaintenanceType::Battery => "battery",
            MaintenanceType::WiperBlades => "wiper_blades",
            MaintenanceType::Alignment => "alignment",
            MaintenanceType::Inspection => "inspection",
            MaintenanceType::Other => "other",
        }
    }

    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            MaintenanceType::OilChange => "Oil Change",
            MaintenanceType::TireRotation => "Tire Rotation",
            MaintenanceType::TireReplacement => "Tire Replacement",
            MaintenanceType::BrakePads => "Brake Pads",
            MaintenanceType::BrakeRotors => "Brake Rotors",
            MaintenanceType::AirFilter => "Air Filter",
            MaintenanceType::CabinFilter => "Cabin Filter",
            MaintenanceType::SparkPlugs => "Spark Plugs",
            MaintenanceType::TransmissionFluid => "Transmission Fluid",
            MaintenanceType::CoolantFlush => "Coolant Flush",
            MaintenanceType::Battery => "Battery",
            MaintenanceType::WiperBlades => "Wiper Blades",
            MaintenanceType::Alignment => "Alignment",
            MaintenanceType::Inspection => "Inspection",
            MaintenanceType::Other => "Other",
        }
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
