//! 계산에 쓰이는 고정 공학/경제 상수와, 설정 파일로 덮어쓸 수 있는 가정값 묶음.

use serde::{Deserialize, Serialize};

use crate::catalog::CoolerKey;

/// 전기 요금 [₺/kWh]
pub const ELECTRICITY_RATE: f64 = 1.5;
/// 상수도 요금 [₺/ton]
pub const WATER_RATE_PER_TON: f64 = 15.0;
/// 하절기 운전 기간 [개월] (5~9월)
pub const SEASON_MONTHS: u32 = 5;
/// 하루 운전 시간 [h]
pub const HOURS_PER_DAY: f64 = 6.0;
/// 월 환산 일수
pub const DAYS_PER_MONTH: f64 = 30.0;
/// 전력망 탄소 배출계수 [kg CO₂/kWh]
pub const CARBON_FACTOR: f64 = 0.45;
/// 일반 에어컨 성능계수(COP)
pub const CONVENTIONAL_COP: f64 = 3.0;
/// 면적당 냉방 부하 [kW/m²]
pub const COOLING_LOAD_PER_M2: f64 = 0.12;
/// 재실자 1인당 추가 풍량 [m³/h]
pub const AIRFLOW_PER_PERSON: f64 = 50.0;
/// 적용 분야를 모를 때 쓰는 환기 횟수 [1/h]
pub const DEFAULT_AIR_CHANGES: f64 = 12.0;
/// 기본 추천 모델(중간 용량)
pub const PREFERRED_COOLER: CoolerKey = CoolerKey::Fes30;

/// 계산 가정값. 기본값은 위 상수와 같고 config.toml의 `[assumptions]`로 바꿀 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub electricity_rate: f64,
    pub water_rate_per_ton: f64,
    pub season_months: u32,
    pub hours_per_day: f64,
    pub carbon_factor: f64,
    pub cop: f64,
    pub cooling_load_per_m2: f64,
    pub airflow_per_person: f64,
    pub default_air_changes: f64,
    pub preferred_cooler: CoolerKey,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            electricity_rate: ELECTRICITY_RATE,
            water_rate_per_ton: WATER_RATE_PER_TON,
            season_months: SEASON_MONTHS,
            hours_per_day: HOURS_PER_DAY,
            carbon_factor: CARBON_FACTOR,
            cop: CONVENTIONAL_COP,
            cooling_load_per_m2: COOLING_LOAD_PER_M2,
            airflow_per_person: AIRFLOW_PER_PERSON,
            default_air_changes: DEFAULT_AIR_CHANGES,
            preferred_cooler: PREFERRED_COOLER,
        }
    }
}

impl Assumptions {
    /// 시즌 운전 시간 [h] = 개월 × 30일 × 하루 운전 시간. 기본값은 900 h.
    pub fn operating_hours(&self) -> f64 {
        f64::from(self.season_months) * DAYS_PER_MONTH * self.hours_per_day
    }
}
