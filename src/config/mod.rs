// ==========================================
// 车辆保养引擎 - 配置层
// ==========================================
// 职责: 判定阈值（到期提醒里程/天数、当季抑制窗口）
// 存储: JSON 文件,缺失时使用默认值
// ==========================================

pub mod engine_policy;
pub mod policy_loader;

use thiserror::Error;

// 重导出
pub use engine_policy::EnginePolicy;
pub use policy_loader::{PolicyLoader, POLICY_ENV_VAR};

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取策略文件失败 (path={path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("解析策略文件失败 (path={path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值错误 (key={key}): {message}")]
    InvalidValue { key: String, message: String },
}
