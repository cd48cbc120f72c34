use chrono::{DateTime, Datelike, Months, TimeZone, Utc};

use crate::config::EnginePolicy;
use crate::domain::types::ServiceStatus;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// 各触发器的计算结果
#[derive(Debug, Clone, Default)]
pub(super) struct TriggerSignals {
    pub due_mileage: Option<i64>,
    pub remaining_miles: Option<i64>,
    pub interval_miles: Option<u32>,
    /// 由寿命触发器收紧了剩余里程
    pub life_tightened: bool,
    pub projected_date: Option<DateTime<Utc>>,

    pub due_date: Option<DateTime<Utc>>,
    pub interval_days: Option<u32>,
    /// 时间触发器的剩余天数（可为负）
    pub time_remaining_days: Option<i64>,
    pub month: Option<MonthSignal>,
}

/// 指定月份触发器
#[derive(Debug, Clone, Copy)]
pub(super) struct MonthSignal {
    /// 距下一次目标月 1 日的天数（>= 0）
    pub remaining_days: i64,
    pub in_target_month: bool,
}

/// 紧急度标志
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct UrgencyFlags {
    pub miles_overdue: bool,
    pub miles_due_soon: bool,
    pub days_overdue: bool,
    pub days_due_soon: bool,
    pub month_due_soon: bool,
}

impl UrgencyFlags {
    /// 超期 > 即将到期 > 未到期
    pub fn status(&self) -> ServiceStatus {
        if self.miles_overdue || self.days_overdue {
            ServiceStatus::Overdue
        } else if self.miles_due_soon || self.days_due_soon || self.month_due_soon {
            ServiceStatus::DueSoon
        } else {
            ServiceStatus::Upcoming
        }
    }
}

impl TriggerSignals {
    /// 里程触发器: 基准里程 + 间隔
    pub fn apply_mileage(&mut self, interval: u32, baseline_mileage: u32, projected: i64) {
        let due = i64::from(baseline_mileage) + i64::from(interval);
        self.due_mileage = Some(due);
        self.remaining_miles = Some(due - projected);
        self.interval_miles = Some(interval);
    }

    /// 寿命触发器: 比里程触发器更紧急时收紧剩余里程
    pub fn apply_life(&mut self, total_life: u32, baseline_mileage: u32, projected: i64) {
        let due = i64::from(baseline_mileage) + i64::from(total_life);
        let remaining = due - projected;

        let tighter = match self.remaining_miles {
            Some(current) => remaining < current,
            None => true,
        };

        if tighter {
            self.life_tightened = self.remaining_miles.is_some();
            self.due_mileage = Some(due);
            self.remaining_miles = Some(remaining);
            self.interval_miles = Some(total_life);
        }
    }

    /// 时间触发器: 基准日期 + N 个月
    pub fn apply_time(
        &mut self,
        months: u32,
        baseline_date: DateTime<Utc>,
        now: DateTime<Utc>,
        days_per_month: u32,
    ) {
        let due = match baseline_date.checked_add_months(Months::new(months)) {
            Some(due) => due,
            None => return,
        };

        self.due_date = Some(due);
        self.time_remaining_days = Some(ceil_days(due, now));
        self.interval_days = Some(months.saturating_mul(days_per_month));
    }

    /// 指定月份触发器: 今年未过则今年,否则明年
    pub fn apply_month(&mut self, month0: u32, now: DateTime<Utc>) {
        let current = now.month0();
        let year = if month0 >= current {
            now.year()
        } else {
            now.year() + 1
        };

        let due = match Utc.with_ymd_and_hms(year, month0 + 1, 1, 0, 0, 0).single() {
            Some(due) => due,
            None => return,
        };

        self.due_date = Some(due);
        self.month = Some(MonthSignal {
            remaining_days: ceil_days(due, now).max(0),
            in_target_month: current == month0,
        });
    }

    /// 对外展示的剩余天数
    pub fn remaining_days(&self) -> Option<i64> {
        self.time_remaining_days
            .or_else(|| self.month.map(|m| m.remaining_days))
    }

    pub fn flags(&self, policy: &EnginePolicy) -> UrgencyFlags {
        let miles = self.remaining_miles;
        let days = self.time_remaining_days;

        UrgencyFlags {
            miles_overdue: miles.map_or(false, |m| m < 0),
            miles_due_soon: miles.map_or(false, |m| m < policy.due_soon_miles),
            days_overdue: days.map_or(false, |d| d < 0),
            days_due_soon: days.map_or(false, |d| d < policy.due_soon_days),
            month_due_soon: self.month.map_or(false, |m| {
                m.in_target_month || m.remaining_days < policy.due_soon_days
            }),
        }
    }
}

/// 向上取整的天数差
fn ceil_days(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (due - now).num_milliseconds();
    (millis as f64 / MILLIS_PER_DAY).ceil() as i64
}
