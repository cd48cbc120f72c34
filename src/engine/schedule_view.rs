// ==========================================
// 车辆保养引擎 - 读模型辅助
// ==========================================
// 职责: 把已排序的待办项整理为展示无关的分组视图
// - 本周 / 本月 / 以后 三段
// - 采购清单（按车分组）
// - 按月时间线
// - 单车保养摘要（距上次保养天数/里程 + 新鲜度）
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::action_item::ActionItem;
use crate::domain::maintenance_log::MaintenanceLog;
use crate::domain::types::{MaintenanceType, ServiceStatus};
use crate::engine::log_matcher;

/// 本周窗口（天）
const WEEK_DAYS: i64 = 7;
/// 本月窗口（天）
const MONTH_DAYS: i64 = 30;

pub const OVERDUE_GROUP: &str = "Overdue";
pub const UNDATED_GROUP: &str = "Future / Unknown Date";

// ==========================================
// 三段分组
// ==========================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBuckets {
    pub this_week: Vec<ActionItem>,
    pub this_month: Vec<ActionItem>,
    pub later: Vec<ActionItem>,
}

/// 采购清单中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyEntry {
    pub item_id: String,
    pub service_name: String,
    pub supply_line: String,
}

/// 按车分组的采购清单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyGroup {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub entries: Vec<SupplyEntry>,
}

/// 时间线分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineGroup {
    pub title: String,
    pub is_overdue: bool,
    pub items: Vec<ActionItem>,
}

pub struct ScheduleView;

impl ScheduleView {
    /// 分为本周 / 本月 / 以后
    ///
    /// 超期或剩余 <= 7 天 → 本周;7 < 剩余 <= 30 → 本月;其余 → 以后
    pub fn bucket(items: &[ActionItem]) -> ScheduleBuckets {
        let mut buckets = ScheduleBuckets::default();

        for item in items {
            let overdue = item.status == ServiceStatus::Overdue;
            match item.remaining_days {
                _ if overdue => buckets.this_week.push(item.clone()),
                Some(days) if days <= WEEK_DAYS => buckets.this_week.push(item.clone()),
                Some(days) if days <= MONTH_DAYS => buckets.this_month.push(item.clone()),
                _ => buckets.later.push(item.clone()),
            }
        }

        buckets
    }

    /// 需要采购的待办项（超期/临期且上次日志有采购信息）,按车分组
    pub fn supply_list(items: &[ActionItem]) -> Vec<SupplyGroup> {
        let mut groups: Vec<SupplyGroup> = Vec::new();

        for item in items {
            if item.status == ServiceStatus::Upcoming {
                continue;
            }
            let line = match item.last_log.as_ref().and_then(|l| l.details.supply_line()) {
                Some(line) => line,
                None => continue,
            };

            let entry = SupplyEntry {
                item_id: item.id.clone(),
                service_name: item.service_name.clone(),
                supply_line: line,
            };

            match groups.iter_mut().find(|g| g.vehicle_id == item.vehicle_id) {
                Some(group) => group.entries.push(entry),
                None => groups.push(SupplyGroup {
                    vehicle_id: item.vehicle_id.clone(),
                    vehicle_name: item.vehicle_name.clone(),
                    entries: vec![entry],
                }),
            }
        }

        groups
    }

    /// 按下一次日期分月的时间线
    ///
    /// 顺序: 超期组 → 各月份(时间顺序) → 无日期组
    pub fn timeline(items: &[ActionItem]) -> Vec<TimelineGroup> {
        let mut sorted: Vec<&ActionItem> = items.iter().collect();
        sorted.sort_by(|a, b| match (a.next_date(), b.next_date()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let mut overdue = Vec::new();
        let mut months: Vec<TimelineGroup> = Vec::new();
        let mut undated = Vec::new();

        for item in sorted {
            if item.status == ServiceStatus::Overdue {
                overdue.push(item.clone());
                continue;
            }

            let date = match item.next_date() {
                Some(date) => date,
                None => {
                    undated.push(item.clone());
                    continue;
                }
            };

            let title = date.format("%B %Y").to_string();
            match months.last_mut() {
                Some(group) if group.title == title => group.items.push(item.clone()),
                _ => months.push(TimelineGroup {
                    title,
                    is_overdue: false,
                    items: vec![item.clone()],
                }),
            }
        }

        let mut groups = Vec::new();
        if !overdue.is_empty() {
            groups.push(TimelineGroup {
                title: OVERDUE_GROUP.to_string(),
                is_overdue: true,
                items: overdue,
            });
        }
        groups.extend(months);
        if !undated.is_empty() {
            groups.push(TimelineGroup {
                title: UNDATED_GROUP.to_string(),
                is_overdue: false,
                items: undated,
            });
        }
        groups
    }
}

// ==========================================
// 单车保养摘要
// ==========================================

/// 新鲜度: Green <= 90 天, Yellow <= 180 天, 其余或无记录为 Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessGrade {
    Green,
    Yellow,
    Red,
}

impl FreshnessGrade {
    pub fn from_days(days_since: Option<i64>) -> Self {
        match days_since {
            Some(d) if d <= 90 => FreshnessGrade::Green,
            Some(d) if d <= 180 => FreshnessGrade::Yellow,
            _ => FreshnessGrade::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FreshnessGrade::Green => "Up to date",
            FreshnessGrade::Yellow => "Due soon",
            FreshnessGrade::Red => "Overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub days_since_last_service: Option<i64>,
    pub miles_since_last_service: Option<i64>,
    pub last_service_type: Option<MaintenanceType>,
    pub grade: FreshnessGrade,
}

impl ServiceSummary {
    /// 基于全部日志（不要求有序）计算摘要
    pub fn compute(logs: &[MaintenanceLog], current_mileage: u32, now: DateTime<Utc>) -> Self {
        let latest = match log_matcher::latest(logs.iter()) {
            Some(log) => log,
            None => {
                return Self {
                    days_since_last_service: None,
                    miles_since_last_service: None,
                    last_service_type: None,
                    grade: FreshnessGrade::Red,
                }
            }
        };

        let days = (now - latest.date).num_days();
        let miles = i64::from(current_mileage) - i64::from(latest.mileage);

        Self {
            days_since_last_service: Some(days),
            miles_since_last_service: (miles >= 0).then_some(miles),
            last_service_type: Some(latest.maintenance_type),
            grade: FreshnessGrade::from_days(Some(days)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action_item::LastLogSnapshot;
    use crate::domain::maintenance_log::{MaintenanceDetails, OilChangeDetails};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn item(id: &str, vehicle: &str, status: ServiceStatus, days: Option<i64>) -> ActionItem {
        ActionItem {
            id: id.to_string(),
            vehicle_id: vehicle.to_string(),
            vehicle_name: vehicle.to_uppercase(),
            interval_id: id.to_string(),
            service_name: id.to_string(),
            status,
            reason: String::new(),
            due_date: days.map(|d| now() + Duration::days(d)),
            due_mileage: None,
            remaining_miles: None,
            remaining_days: days,
            interval_miles: None,
            interval_days: None,
            is_projected: false,
            projected_date: None,
            projected_mileage: None,
            is_optional: false,
            maintenance_type: None,
            last_log: None,
        }
    }

    fn ids(items: &[ActionItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_bucket_boundaries() {
        let items = vec![
            item("overdue", "a", ServiceStatus::Overdue, Some(-5)),
            item("week", "a", ServiceStatus::DueSoon, Some(7)),
            item("month", "a", ServiceStatus::DueSoon, Some(8)),
            item("month_edge", "a", ServiceStatus::Upcoming, Some(30)),
            item("later", "a", ServiceStatus::Upcoming, Some(31)),
            item("undated", "a", ServiceStatus::DueSoon, None),
        ];
        let buckets = ScheduleView::bucket(&items);
        assert_eq!(ids(&buckets.this_week), vec!["overdue", "week"]);
        assert_eq!(ids(&buckets.this_month), vec!["month", "month_edge"]);
        assert_eq!(ids(&buckets.later), vec!["later", "undated"]);
    }

    #[test]
    fn test_supply_list_groups_by_vehicle() {
        let oil = MaintenanceDetails::OilChange(OilChangeDetails {
            oil_brand: Some("Castrol".to_string()),
            oil_weight: Some("0W-20".to_string()),
            ..Default::default()
        });
        let snapshot = LastLogSnapshot {
            date: now(),
            mileage: 1000,
            shop: None,
            details: oil,
        };

        let mut a1 = item("oil-a", "a", ServiceStatus::Overdue, None);
        a1.last_log = Some(snapshot.clone());
        let mut b1 = item("oil-b", "b", ServiceStatus::DueSoon, None);
        b1.last_log = Some(snapshot.clone());
        let mut a2 = item("oil-a2", "a", ServiceStatus::DueSoon, None);
        a2.last_log = Some(snapshot.clone());
        let mut up = item("later", "a", ServiceStatus::Upcoming, None);
        up.last_log = Some(snapshot);
        let bare = item("bare", "a", ServiceStatus::Overdue, None);

        let groups = ScheduleView::supply_list(&[a1, b1, a2, up, bare]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].vehicle_id, "a");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].entries[0].supply_line, "Castrol 0W-20");
        assert_eq!(groups[1].vehicle_name, "B");
    }

    #[test]
    fn test_timeline_groups() {
        let items = vec![
            item("nov", "a", ServiceStatus::Upcoming, Some(20)),
            item("late", "a", ServiceStatus::Overdue, Some(-1)),
            item("none", "a", ServiceStatus::Upcoming, None),
            item("oct", "a", ServiceStatus::DueSoon, Some(3)),
            item("dec", "a", ServiceStatus::Upcoming, Some(50)),
        ];
        let groups = ScheduleView::timeline(&items);
        let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![OVERDUE_GROUP, "October 2026", "November 2026", "December 2026", UNDATED_GROUP]
        );
        assert!(groups[0].is_overdue);
    }

    fn log(days_ago: i64, mileage: u32, kind: MaintenanceType) -> MaintenanceLog {
        MaintenanceLog {
            id: None,
            maintenance_type: kind,
            date: now() - Duration::days(days_ago),
            mileage,
            cost_cents: 4599,
            shop: None,
            notes: None,
            details: MaintenanceDetails::default(),
        }
    }

    #[test]
    fn test_summary_uses_latest_log() {
        let logs = vec![
            log(200, 30_000, MaintenanceType::Inspection),
            log(100, 38_000, MaintenanceType::OilChange),
        ];
        let summary = ServiceSummary::compute(&logs, 40_000, now());
        assert_eq!(summary.days_since_last_service, Some(100));
        assert_eq!(summary.miles_since_last_service, Some(2_000));
        assert_eq!(summary.last_service_type, Some(MaintenanceType::OilChange));
        assert_eq!(summary.grade, FreshnessGrade::Yellow);
    }

    #[test]
    fn test_summary_same_day_keeps_first_log() {
        // 与规则基准一致: 同一天的日志取先出现的一条
        let logs = vec![
            log(20, 39_000, MaintenanceType::TireRotation),
            log(20, 39_000, MaintenanceType::OilChange),
        ];
        let summary = ServiceSummary::compute(&logs, 40_000, now());
        assert_eq!(summary.last_service_type, Some(MaintenanceType::TireRotation));
    }

    #[test]
    fn test_summary_without_history() {
        let summary = ServiceSummary::compute(&[], 40_000, now());
        assert_eq!(summary.grade, FreshnessGrade::Red);
        assert_eq!(summary.last_service_type, None);
    }

    #[test]
    fn test_summary_odometer_behind_log() {
        let logs = vec![log(10, 41_000, MaintenanceType::OilChange)];
        let summary = ServiceSummary::compute(&logs, 40_000, now());
        assert_eq!(summary.miles_since_last_service, None);
        assert_eq!(summary.grade, FreshnessGrade::Green);
    }
}
