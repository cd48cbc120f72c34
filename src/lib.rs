// ==========================================
// 车辆保养引擎 - 核心库
// ==========================================
// 系统定位: 保养到期推算与分级（纯函数,不写存储）
// 输入: 车辆/规则/日志快照 + 判定时刻 now
// 输出: 带原因说明的全局排序待办项
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 推算与判定
pub mod engine;

// 配置层 - 判定阈值
pub mod config;

// API 层 - 调用方入口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{MaintenanceType, Season, ServiceStatus, VehicleType};

// 领域实体
pub use domain::{
    ActionItem, IntervalKind, LastLogSnapshot, MaintenanceDetails, MaintenanceLog,
    ServiceInterval, Vehicle,
};

// 引擎
pub use engine::{
    ActionAggregator, ActionSorter, DefaultRuleCatalog, LogMatcher, MileageProjector,
    RuleEvaluator, ScheduleView,
};

// 配置
pub use config::{ConfigError, EnginePolicy, PolicyLoader};

// API
pub use api::{ApiError, ApiResult, FleetSnapshot, IntervalValidator, MaintenanceApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "maintenance-hub";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, config::policy_loader::APP_DIR_NAME);
    }
}
