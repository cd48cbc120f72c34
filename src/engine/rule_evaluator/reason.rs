use chrono::{DateTime, Utc};

use super::triggers::{TriggerSignals, UrgencyFlags};
use crate::domain::types::{Season, ServiceStatus};

pub(super) const OPTIONAL_PREFIX: &str = "(Optional) ";

/// 可选规则统一加前缀
pub(super) fn with_optional_prefix(reason: String, is_optional: bool) -> String {
    if is_optional {
        format!("{}{}", OPTIONAL_PREFIX, reason)
    } else {
        reason
    }
}

/// 当季强制提醒
pub(super) fn seasonal(season: Season, name: &str) -> String {
    format!("It is {}, time for {}.", season, name)
}

/// 非季节路径的原因文本
///
/// 多个触发器同时超期/临期时全部列出,只有一个时只报该项
pub(super) fn compose(
    status: ServiceStatus,
    signals: &TriggerSignals,
    flags: &UrgencyFlags,
    season: Option<Season>,
    now: DateTime<Utc>,
) -> String {
    match status {
        ServiceStatus::Overdue => overdue(signals, flags),
        ServiceStatus::DueSoon => due_soon(signals, flags),
        ServiceStatus::Upcoming => upcoming(signals, season, now),
    }
}

fn overdue(signals: &TriggerSignals, flags: &UrgencyFlags) -> String {
    let mut parts = Vec::new();
    if flags.miles_overdue {
        if let Some(miles) = signals.remaining_miles {
            parts.push(format!("{} miles", miles.abs()));
        }
    }
    if flags.days_overdue {
        if let Some(days) = signals.time_remaining_days {
            parts.push(format!("{} days", days.abs()));
        }
    }
    format!("Overdue by {}", parts.join(" and "))
}

fn due_soon(signals: &TriggerSignals, flags: &UrgencyFlags) -> String {
    let mut parts = Vec::new();
    if flags.miles_due_soon {
        if let Some(miles) = signals.remaining_miles {
            parts.push(format!("{} miles", miles));
        }
    }
    if flags.days_due_soon {
        if let Some(days) = signals.time_remaining_days {
            parts.push(format!("{} days", days));
        }
    }

    let this_month = match signals.month {
        Some(month) if flags.month_due_soon => {
            if month.in_target_month {
                true
            } else {
                parts.push(format!("{} days", month.remaining_days));
                false
            }
        }
        _ => false,
    };

    match (parts.is_empty(), this_month) {
        (true, _) => "Due this month".to_string(),
        (false, true) => format!("Due in {}; due this month", parts.join(" and ")),
        (false, false) => format!("Due in {}", parts.join(" and ")),
    }
}

fn upcoming(signals: &TriggerSignals, season: Option<Season>, now: DateTime<Utc>) -> String {
    let miles = signals.remaining_miles;
    let days = signals.remaining_days();

    match (miles, days) {
        (Some(m), Some(d)) => format!("Due in {} miles or {} days", m, d),
        (Some(m), None) => format!("Due in {} miles", m),
        (None, Some(d)) => format!("Due in {} days", d),
        (None, None) => match season {
            Some(season) if season.contains(now) => format!("Already done this {}", season),
            Some(season) => format!("Due in {}", season),
            None => "No due point configured".to_string(),
        },
    }
}
