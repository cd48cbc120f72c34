// ==========================================
// 车辆保养引擎 - 里程推算
// ==========================================
// 职责: 里程表读数过旧时,按年里程估计推算当前里程
// 输入: Vehicle + now
// 输出: 推算里程（不小于已录入里程）
// ==========================================

use chrono::{DateTime, Duration, Utc};

use crate::domain::vehicle::Vehicle;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// 里程推算器（无状态）
#[derive(Debug, Clone, Copy, Default)]
pub struct MileageProjector;

impl MileageProjector {
    pub fn new() -> Self {
        Self
    }

    /// 推算当前里程
    ///
    /// 规则:
    /// 1) 年里程估计缺失或 <= 0 → 返回已录入里程
    /// 2) 否则 已录入里程 + floor(年里程/365 × 距上次更新天数)
    ///
    /// 距上次更新天数截断到 >= 0,结果不会小于已录入里程
    pub fn project(&self, vehicle: &Vehicle, now: DateTime<Utc>) -> i64 {
        let recorded = i64::from(vehicle.current_mileage);

        let daily_rate = match vehicle.daily_rate() {
            Some(rate) => rate,
            None => return recorded,
        };

        let elapsed_days = elapsed_days(vehicle.updated_at, now);
        let growth = (daily_rate * elapsed_days).floor() as i64;

        // 年里程估计极大时 growth 饱和到 i64::MAX
        recorded.saturating_add(growth.max(0))
    }

    /// 按日均里程反推达到剩余里程的日期
    ///
    /// remaining_miles 为负时结果落在过去,由 floor 截断
    pub fn estimate_due_date(
        &self,
        vehicle: &Vehicle,
        remaining_miles: i64,
        now: DateTime<Utc>,
        floor: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let daily_rate = vehicle.daily_rate()?;
        let days_until_due = remaining_miles as f64 / daily_rate;
        let offset = Duration::try_milliseconds((days_until_due * MILLIS_PER_DAY).round() as i64)?;
        let projected = now.checked_add_signed(offset)?;

        Some(projected.max(floor))
    }
}

/// 两个时刻间的天数（小数,截断到 >= 0）
fn elapsed_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds();
    (millis as f64 / MILLIS_PER_DAY).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn base_vehicle() -> Vehicle {
        Vehicle {
            id: "v1".to_string(),
            name: "Civic".to_string(),
            vehicle_type: Default::default(),
            current_mileage: 50_000,
            estimated_annual_mileage: Some(12_000),
            created_at: now() - Duration::days(900),
            updated_at: now() - Duration::days(30),
            service_intervals: Vec::new(),
        }
    }

    #[test]
    fn test_project_thirty_days() {
        let projector = MileageProjector::new();
        // 12000/365*30 = 986.3 → 986
        assert_eq!(projector.project(&base_vehicle(), now()), 50_986);
    }

    #[test]
    fn test_no_estimate_returns_recorded() {
        let projector = MileageProjector::new();
        let mut vehicle = base_vehicle();
        vehicle.estimated_annual_mileage = None;
        assert_eq!(projector.project(&vehicle, now()), 50_000);

        vehicle.estimated_annual_mileage = Some(0);
        assert_eq!(projector.project(&vehicle, now()), 50_000);

        vehicle.estimated_annual_mileage = Some(-500);
        assert_eq!(projector.project(&vehicle, now()), 50_000);
    }

    #[test]
    fn test_future_update_timestamp_clamped() {
        let projector = MileageProjector::new();
        let mut vehicle = base_vehicle();
        vehicle.updated_at = now() + Duration::days(10);
        assert_eq!(projector.project(&vehicle, now()), 50_000);
    }

    #[test]
    fn test_projection_never_below_recorded() {
        let projector = MileageProjector::new();
        for annual in [1_i64, 7, 365, 12_000, 250_000] {
            for days in [0_i64, 1, 45, 400] {
                let mut vehicle = base_vehicle();
                vehicle.estimated_annual_mileage = Some(annual);
                vehicle.updated_at = now() - Duration::days(days);
                assert!(projector.project(&vehicle, now()) >= 50_000);
            }
        }
    }

    #[test]
    fn test_huge_annual_estimate_saturates() {
        let projector = MileageProjector::new();
        let mut vehicle = base_vehicle();
        vehicle.estimated_annual_mileage = Some(i64::MAX);
        vehicle.updated_at = now() - Duration::days(400);

        assert_eq!(projector.project(&vehicle, now()), i64::MAX);
    }

    #[test]
    fn test_estimate_due_date_forward_and_floor() {
        let projector = MileageProjector::new();
        let vehicle = base_vehicle();

        // 365 英里 / 日均 32.88 英里 ≈ 11.1 天
        let due = projector
            .estimate_due_date(&vehicle, 365, now(), now())
            .unwrap();
        assert_eq!((due - now()).num_days(), 11);

        // 已超期: 截断到 floor
        let floor = now() - Duration::days(3);
        let due = projector
            .estimate_due_date(&vehicle, -10_000, now(), floor)
            .unwrap();
        assert_eq!(due, floor);
    }

    #[test]
    fn test_estimate_due_date_requires_rate() {
        let projector = MileageProjector::new();
        let mut vehicle = base_vehicle();
        vehicle.estimated_annual_mileage = None;
        assert!(projector.estimate_due_date(&vehicle, 100, now(), now()).is_none());
    }
}
