// ==========================================
// 车辆保养引擎 - 策略加载器
// ==========================================
// 查找顺序:
// 1) 显式路径
// 2) 环境变量 MAINTENANCE_HUB_POLICY
// 3) <config_dir>/maintenance-hub/policy.json (存在时)
// 4) 默认值
// ==========================================

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::engine_policy::EnginePolicy;
use crate::config::ConfigError;

/// 策略文件路径的环境变量
pub const POLICY_ENV_VAR: &str = "MAINTENANCE_HUB_POLICY";

/// 默认配置目录名
pub const APP_DIR_NAME: &str = "maintenance-hub";

pub struct PolicyLoader {
    explicit_path: Option<PathBuf>,
}

impl PolicyLoader {
    pub fn new() -> Self {
        Self { explicit_path: None }
    }

    /// 指定策略文件（优先级最高）
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.explicit_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// 加载策略
    ///
    /// 显式路径或环境变量指向的文件必须存在;默认位置的文件缺失时回落为默认值。
    pub fn load(&self) -> Result<EnginePolicy, ConfigError> {
        if let Some(path) = &self.explicit_path {
            return Self::load_file(path);
        }

        if let Ok(raw) = env::var(POLICY_ENV_VAR) {
            let raw = raw.trim();
            if !raw.is_empty() {
                return Self::load_file(Path::new(raw));
            }
        }

        if let Some(path) = Self::default_path() {
            if path.is_file() {
                return Self::load_file(&path);
            }
        }

        tracing::debug!("未找到策略文件,使用默认阈值");
        Ok(EnginePolicy::default())
    }

    /// 从 JSON 文件加载并校验
    pub fn load_file(path: &Path) -> Result<EnginePolicy, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let policy: EnginePolicy =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        policy.validate()?;
        tracing::info!(path = %path.display(), "已加载策略文件");
        Ok(policy)
    }

    /// 默认策略文件位置
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("policy.json"))
    }
}

impl Default for PolicyLoader {
    fn default() -> Self {
        Self::new()
    }
}
