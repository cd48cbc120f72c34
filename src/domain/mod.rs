// ==========================================
// 车辆保养引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod action_item;
pub mod interval;
pub mod maintenance_log;
pub mod types;
pub mod vehicle;

// 重导出核心类型
pub use action_item::{ActionItem, LastLogSnapshot};
pub use interval::{ComponentLife, IntervalKind, ServiceInterval, TriggerSet};
pub use maintenance_log::{
    BrakeDetails, MaintenanceDetails, MaintenanceLog, OilChangeDetails, PartDetails, TireDetails,
};
pub use types::{MaintenanceType, Season, ServiceStatus, VehicleType};
pub use vehicle::Vehicle;
