// ==========================================
// 车辆保养引擎 - 全局排序
// ==========================================
// 排序键:
// 1) 状态等级升序 (overdue=0 < due_soon=1 < upcoming=2)
// 2) remaining_days 升序,缺失时使用哨兵值
// 稳定排序: 两键都相同的项保持输入顺序
// ==========================================

use std::cmp::Ordering;

use crate::domain::action_item::ActionItem;

pub struct ActionSorter {
    missing_days_key: i64,
}

impl ActionSorter {
    /// # 参数
    /// - `missing_days_key`: 无剩余天数项的排序键（默认策略 9999）
    pub fn new(missing_days_key: i64) -> Self {
        Self { missing_days_key }
    }

    /// 排序待办项（稳定）
    pub fn sort(&self, mut items: Vec<ActionItem>) -> Vec<ActionItem> {
        items.sort_by(|a, b| self.compare(a, b));
        items
    }

    /// Ordering::Less 表示 a 优先于 b
    pub fn compare(&self, a: &ActionItem, b: &ActionItem) -> Ordering {
        match a.status.rank().cmp(&b.status.rank()) {
            Ordering::Equal => {}
            other => return other,
        }

        a.days_sort_key(self.missing_days_key)
            .cmp(&b.days_sort_key(self.missing_days_key))
    }
}

impl Default for ActionSorter {
    fn default() -> Self {
        Self::new(9999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ServiceStatus;

    fn item(id: &str, status: ServiceStatus, remaining_days: Option<i64>) -> ActionItem {
        ActionItem {
            id: id.to_string(),
            vehicle_id: "v".to_string(),
            vehicle_name: "Truck".to_string(),
            interval_id: id.to_string(),
            service_name: id.to_string(),
            status,
            reason: String::new(),
            due_date: None,
            due_mileage: None,
            remaining_miles: None,
            remaining_days,
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
    fn test_status_then_days() {
        let sorter = ActionSorter::default();
        let sorted = sorter.sort(vec![
            item("a", ServiceStatus::Overdue, Some(5)),
            item("b", ServiceStatus::DueSoon, Some(2)),
            item("c", ServiceStatus::Overdue, Some(1)),
        ]);
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_missing_days_sort_last_within_status() {
        let sorter = ActionSorter::default();
        let sorted = sorter.sort(vec![
            item("none", ServiceStatus::Upcoming, None),
            item("far", ServiceStatus::Upcoming, Some(400)),
            item("soon", ServiceStatus::DueSoon, None),
        ]);
        assert_eq!(ids(&sorted), vec!["soon", "far", "none"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let sorter = ActionSorter::default();
        let sorted = sorter.sort(vec![
            item("first", ServiceStatus::Overdue, None),
            item("second", ServiceStatus::Overdue, None),
            item("third", ServiceStatus::Overdue, Some(9999)),
        ]);
        assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_overdue_negative_days_first() {
        let sorter = ActionSorter::default();
        let sorted = sorter.sort(vec![
            item("x", ServiceStatus::Overdue, Some(-3)),
            item("y", ServiceStatus::Overdue, Some(-40)),
        ]);
        assert_eq!(ids(&sorted), vec!["y", "x"]);
    }
}
