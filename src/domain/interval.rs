// ==========================================
// 车辆保养引擎 - 保养规则 (Service Interval)
// ==========================================
// 职责: 用户自定义的保养周期规则
// 存储格式: 一条记录 + kind 判别字段 + 可选触发字段
// 引擎使用: 先解析为 TriggerSet,再逐个触发器计算
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::types::{MaintenanceType, Season};

// ==========================================
// 规则类别 (Interval Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    Mileage,   // 按里程
    Time,      // 按时间(月)
    Seasonal,  // 按季节
    Composite, // 里程 + 时间,先到为准
    Month,     // 每年指定月份
}

impl IntervalKind {
    /// 该类别是否启用里程触发器
    pub fn uses_mileage(self) -> bool {
        matches!(self, IntervalKind::Mileage | IntervalKind::Composite)
    }

    /// 该类别是否启用时间触发器
    pub fn uses_time(self) -> bool {
        matches!(self, IntervalKind::Time | IntervalKind::Composite)
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalKind::Mileage => write!(f, "mileage"),
            IntervalKind::Time => write!(f, "time"),
            IntervalKind::Seasonal => write!(f, "seasonal"),
            IntervalKind::Composite => write!(f, "composite"),
            IntervalKind::Month => write!(f, "month"),
        }
    }
}

// ==========================================
// ServiceInterval - 保养规则
// ==========================================
/// 保养规则（存储层记录）
///
/// 字段是否生效取决于 `kind`:
/// - mileage / composite: `mileage_interval`
/// - time / composite: `time_interval_months`
/// - month: `specific_month` (0-11)
/// - `season` 与 `total_life_mileage` 对任意类别都生效
///
/// 合法性在录入时由 `api::IntervalValidator` 校验;引擎对缺失字段静默降级。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInterval {
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: IntervalKind,

    /// 精确匹配日志类别（缺失时按名称/备注模糊匹配）
    #[serde(default)]
    pub target_maintenance_type: Option<MaintenanceType>,

    #[serde(default)]
    pub mileage_interval: Option<u32>,

    #[serde(default)]
    pub time_interval_months: Option<u32>,

    #[serde(default)]
    pub season: Option<Season>,

    /// 0 = 一月, 11 = 十二月
    #[serde(default)]
    pub specific_month: Option<u32>,

    #[serde(default)]
    pub is_optional: bool,

    #[serde(default)]
    pub is_component_based: bool,

    #[serde(default)]
    pub component_installation_type: Option<MaintenanceType>,

    #[serde(default)]
    pub total_life_mileage: Option<u32>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl ServiceInterval {
    fn blank(id: &str, name: &str, kind: IntervalKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            target_maintenance_type: None,
            mileage_interval: None,
            time_interval_months: None,
            season: None,
            specific_month: None,
            is_optional: false,
            is_component_based: false,
            component_installation_type: None,
            total_life_mileage: None,
            notes: None,
        }
    }

    /// 每 N 英里
    pub fn mileage(id: &str, name: &str, miles: u32) -> Self {
        Self {
            mileage_interval: Some(miles),
            ..Self::blank(id, name, IntervalKind::Mileage)
        }
    }

    /// 每 N 个月
    pub fn time(id: &str, name: &str, months: u32) -> Self {
        Self {
            time_interval_months: Some(months),
            ..Self::blank(id, name, IntervalKind::Time)
        }
    }

    /// 每 N 英里或 M 个月,先到为准
    pub fn composite(id: &str, name: &str, miles: u32, months: u32) -> Self {
        Self {
            mileage_interval: Some(miles),
            time_interval_months: Some(months),
            ..Self::blank(id, name, IntervalKind::Composite)
        }
    }

    /// 每年某季节
    pub fn seasonal(id: &str, name: &str, season: Season) -> Self {
        Self {
            season: Some(season),
            ..Self::blank(id, name, IntervalKind::Seasonal)
        }
    }

    /// 每年指定月份 (0-11)
    pub fn month(id: &str, name: &str, month0: u32) -> Self {
        Self {
            specific_month: Some(month0),
            ..Self::blank(id, name, IntervalKind::Month)
        }
    }

    pub fn targeting(mut self, maintenance_type: MaintenanceType) -> Self {
        self.target_maintenance_type = Some(maintenance_type);
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// 部件寿命: 以安装日志为基准,累计 total_life_mileage 英里后更换
    pub fn component(mut self, installation_type: MaintenanceType, total_life_mileage: u32) -> Self {
        self.is_component_based = true;
        self.component_installation_type = Some(installation_type);
        self.total_life_mileage = Some(total_life_mileage);
        self
    }

    /// 解析本规则实际生效的触发器
    ///
    /// 缺失字段或 0 值视为该触发器不生效,不报错。
    pub fn triggers(&self) -> TriggerSet {
        let positive = |v: Option<u32>| v.filter(|n| *n > 0);

        TriggerSet {
            mileage: if self.kind.uses_mileage() {
                positive(self.mileage_interval)
            } else {
                None
            },
            time_months: if self.kind.uses_time() {
                positive(self.time_interval_months)
            } else {
                None
            },
            month0: match self.kind {
                IntervalKind::Month => self.specific_month.filter(|m| *m < 12),
                _ => None,
            },
            season: self.season,
            life: positive(self.total_life_mileage).map(|total| ComponentLife {
                installation_type: if self.is_component_based {
                    self.component_installation_type
                } else {
                    None
                },
                total_life_mileage: total,
            }),
        }
    }
}

// ==========================================
// TriggerSet - 已解析的触发器集合
// ==========================================
/// 一条规则可同时激活多个触发器（composite、部件寿命 + 里程等）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerSet {
    /// 里程间隔
    pub mileage: Option<u32>,
    /// 时间间隔（月）
    pub time_months: Option<u32>,
    /// 指定月份 (0-11)
    pub month0: Option<u32>,
    pub season: Option<Season>,
    pub life: Option<ComponentLife>,
}

impl TriggerSet {
    /// 是否没有任何可用触发器
    pub fn is_empty(&self) -> bool {
        self.mileage.is_none()
            && self.time_months.is_none()
            && self.month0.is_none()
            && self.season.is_none()
            && self.life.is_none()
    }
}

/// 部件寿命触发器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentLife {
    /// 安装日志类别（仅 is_component_based 时有效）
    pub installation_type: Option<MaintenanceType>,
    pub total_life_mileage: u32,
}
