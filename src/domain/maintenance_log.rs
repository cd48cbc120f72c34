// ==========================================
// 车辆保养引擎 - 保养日志
// ==========================================
// 职责: 已完成的保养事件（历史事实,只读）
// 明细: 按类别区分的 tagged union,不使用松散键值包
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::types::MaintenanceType;

/// 保养日志
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceLog {
    #[serde(default)]
    pub id: Option<String>,

    pub maintenance_type: MaintenanceType,

    pub date: DateTime<Utc>,

    /// 保养时里程
    pub mileage: u32,

    /// 费用（分）
    #[serde(default)]
    pub cost_cents: i64,

    #[serde(default)]
    pub shop: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub details: MaintenanceDetails,
}

// ==========================================
// 明细 (Maintenance Details)
// ==========================================

/// 按保养类别区分的明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum MaintenanceDetails {
    OilChange(OilChangeDetails),
    Tire(TireDetails),
    Brake(BrakeDetails),
    Part(PartDetails),
    Generic(BTreeMap<String, serde_json::Value>),
}

impl Default for MaintenanceDetails {
    fn default() -> Self {
        MaintenanceDetails::Generic(BTreeMap::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OilChangeDetails {
    pub oil_type: Option<String>,
    pub oil_weight: Option<String>,
    pub oil_brand: Option<String>,
    /// 夸脱
    pub oil_quantity: Option<f64>,
    pub filter_brand: Option<String>,
    pub filter_part_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TireDetails {
    pub positions: Vec<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub size: Option<String>,
    /// 例如 "8/32"
    pub tread_depth: Option<String>,
    /// PSI
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrakeDetails {
    /// Front / Rear / All
    pub position: Option<String>,
    pub brand: Option<String>,
    pub pad_type: Option<String>,
    pub pad_thickness: Option<String>,
    pub rotor_replaced: bool,
    pub fluid_flushed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartDetails {
    pub brand: Option<String>,
    pub part_number: Option<String>,
}

impl MaintenanceDetails {
    /// 采购清单行（例如 "Mobil 1 5W-30 · 5qt · Fram PH7317 filter"）
    ///
    /// 没有任何可采购信息时返回 None
    pub fn supply_line(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        match self {
            MaintenanceDetails::OilChange(d) => {
                if let (Some(brand), Some(weight)) = (&d.oil_brand, &d.oil_weight) {
                    parts.push(format!("{} {}", brand, weight));
                }
                if let Some(qty) = d.oil_quantity.filter(|q| *q > 0.0) {
                    parts.push(format!("{}qt", qty));
                }
                if let Some(filter) = &d.filter_brand {
                    match &d.filter_part_number {
                        Some(pn) => parts.push(format!("{} {} filter", filter, pn)),
                        None => parts.push(format!("{} filter", filter)),
                    }
                }
            }
            MaintenanceDetails::Tire(d) => {
                match (&d.brand, &d.model) {
                    (Some(brand), Some(model)) => parts.push(format!("{} {}", brand, model)),
                    (Some(brand), None) => parts.push(brand.clone()),
                    _ => {}
                }
                if let Some(size) = &d.size {
                    parts.push(size.clone());
                }
            }
            MaintenanceDetails::Brake(d) => {
                if let Some(brand) = &d.brand {
                    match &d.pad_type {
                        Some(pad) => parts.push(format!("{} {} pads", brand, pad)),
                        None => parts.push(brand.clone()),
                    }
                }
            }
            MaintenanceDetails::Part(d) => match (&d.brand, &d.part_number) {
                (Some(brand), Some(pn)) => parts.push(format!("{} {}", brand, pn)),
                (Some(brand), None) => parts.push(brand.clone()),
                (None, Some(pn)) => parts.push(pn.clone()),
                (None, None) => {}
            },
            MaintenanceDetails::Generic(_) => {}
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}
