// ==========================================
// 车辆保养引擎 - 日志匹配与基准解析
// ==========================================
// 两级匹配:
// 1) 规则设置了 target_maintenance_type → 仅按类别精确匹配
// 2) 否则按名称回落: 规则名(小写,下划线→空格) == 日志类别,
//    或日志备注(不区分大小写)包含规则名
// 基准:
// - 服务基准: 最近一条匹配日志;无日志时取车辆创建时间 + 0 里程
// - 寿命基准: 部件规则在全部日志中找最近一条安装日志,找不到则同服务基准
// ==========================================

use chrono::{DateTime, Utc};

use crate::domain::interval::ServiceInterval;
use crate::domain::maintenance_log::MaintenanceLog;
use crate::domain::types::MaintenanceType;
use crate::domain::vehicle::Vehicle;

/// 命中方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// 类别精确匹配
    Category,
    /// 规则名与日志类别一致
    Name,
    /// 日志备注包含规则名
    Notes,
}

/// 基准点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    pub date: DateTime<Utc>,
    pub mileage: u32,
    /// 是否来自真实日志（否则为车辆创建时间兜底）
    pub from_log: bool,
}

impl Baseline {
    fn from_log(log: &MaintenanceLog) -> Self {
        Self {
            date: log.date,
            mileage: log.mileage,
            from_log: true,
        }
    }

    fn fallback(vehicle: &Vehicle) -> Self {
        Self {
            date: vehicle.created_at,
            mileage: 0,
            from_log: false,
        }
    }
}

/// 单条规则的基准解析结果
#[derive(Debug, Clone, Copy)]
pub struct ResolvedBaselines<'a> {
    /// 最近一条匹配日志
    pub last_service: Option<&'a MaintenanceLog>,
    /// 里程/时间/季节触发器的基准
    pub service: Baseline,
    /// 寿命触发器的基准
    pub life: Baseline,
}

/// 日志匹配器（无状态）
pub struct LogMatcher;

impl LogMatcher {
    /// 判断日志是否与规则相关,返回命中方式
    pub fn match_tier(rule: &ServiceInterval, log: &MaintenanceLog) -> Option<MatchTier> {
        if let Some(target) = rule.target_maintenance_type {
            return (log.maintenance_type == target).then_some(MatchTier::Category);
        }

        let name = normalize(&rule.name);
        if name.is_empty() {
            return None;
        }

        if normalize(log.maintenance_type.code()) == name {
            return Some(MatchTier::Name);
        }

        match &log.notes {
            Some(notes) if notes.to_lowercase().contains(&name) => Some(MatchTier::Notes),
            _ => None,
        }
    }

    pub fn is_relevant(rule: &ServiceInterval, log: &MaintenanceLog) -> bool {
        Self::match_tier(rule, log).is_some()
    }

    /// 最近一条相关日志
    pub fn latest_relevant<'a>(
        rule: &ServiceInterval,
        logs: &'a [MaintenanceLog],
    ) -> Option<&'a MaintenanceLog> {
        latest(logs.iter().filter(|log| Self::is_relevant(rule, log)))
    }

    /// 全部日志中最近一条指定类别的日志
    pub fn latest_of_type(
        logs: &[MaintenanceLog],
        maintenance_type: MaintenanceType,
    ) -> Option<&MaintenanceLog> {
        latest(logs.iter().filter(|log| log.maintenance_type == maintenance_type))
    }

    /// 解析服务基准与寿命基准
    pub fn resolve<'a>(
        vehicle: &Vehicle,
        rule: &ServiceInterval,
        logs: &'a [MaintenanceLog],
    ) -> ResolvedBaselines<'a> {
        let last_service = Self::latest_relevant(rule, logs);
        let service = last_service
            .map(Baseline::from_log)
            .unwrap_or_else(|| Baseline::fallback(vehicle));

        let installation = if rule.is_component_based {
            rule.component_installation_type
                .and_then(|kind| Self::latest_of_type(logs, kind))
        } else {
            None
        };

        let life = installation.map(Baseline::from_log).unwrap_or(service);

        ResolvedBaselines {
            last_service,
            service,
            life,
        }
    }
}

/// 规则名/类别归一化: 去首尾空白、小写、下划线→空格
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', " ")
}

/// 取日期最新的日志;日期相同时保留先出现的一条
pub(crate) fn latest<'a, I>(logs: I) -> Option<&'a MaintenanceLog>
where
    I: Iterator<Item = &'a MaintenanceLog>,
{
    logs.fold(None, |best: Option<&MaintenanceLog>, log| match best {
        Some(current) if current.date >= log.date => Some(current),
        _ => Some(log),
    })
}
