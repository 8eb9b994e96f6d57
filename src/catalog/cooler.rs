//! FES 증발식 냉각기 모델 카탈로그.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoolerKey {
    #[serde(rename = "fes25")]
    Fes25,
    #[serde(rename = "fes30")]
    Fes30,
    #[serde(rename = "fes35plug")]
    Fes35Plug,
}

impl CoolerKey {
    pub fn code(&self) -> &'static str {
        match self {
            CoolerKey::Fes25 => "fes25",
            CoolerKey::Fes30 => "fes30",
            CoolerKey::Fes35Plug => "fes35plug",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        COOLER_TYPES
            .iter()
            .find(|c| c.key.code().eq_ignore_ascii_case(code.trim()))
            .map(|c| c.key)
    }
}

/// 냉각기 한 대의 사양.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoolerType {
    pub key: CoolerKey,
    pub name: &'static str,
    pub model: &'static str,
    /// 대당 풍량 [m³/h]
    pub capacity_m3h: f64,
    /// 대당 소비전력 [kW]
    pub power_kw: f64,
}

/// 카탈로그 순서가 곧 옵션 표시 순서이며, 추천 모델이 없을 때의 폴백 순서다.
pub static COOLER_TYPES: [CoolerType; 3] = [
    CoolerType {
        key: CoolerKey::Fes25,
        name: "FES25",
        model: "FES25-APB/APT",
        capacity_m3h: 25_000.0,
        power_kw: 2.2,
    },
    CoolerType {
        key: CoolerKey::Fes30,
        name: "FES30",
        model: "FES30-APB/APT",
        capacity_m3h: 30_000.0,
        power_kw: 3.0,
    },
    CoolerType {
        key: CoolerKey::Fes35Plug,
        name: "FES35",
        model: "FES35-PLUG",
        capacity_m3h: 35_000.0,
        power_kw: 11.2,
    },
];

pub fn cooler_types() -> &'static [CoolerType] {
    &COOLER_TYPES
}

pub fn find_cooler(key: CoolerKey) -> Option<&'static CoolerType> {
    COOLER_TYPES.iter().find(|c| c.key == key)
}
