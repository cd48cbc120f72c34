// ==========================================
// 车辆保养引擎 - API 层
// ==========================================
// 职责: 调用方入口（默认规则替换、规则录入校验、快照读取）
// ==========================================

pub mod error;
pub mod maintenance_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use maintenance_api::{FleetSnapshot, MaintenanceApi};
pub use validator::IntervalValidator;
