//! 증발식 냉각 용량 계산.
//! 면적/높이/재실자/외기 조건으로 필요 풍량과 냉방 부하를 구하고, 모델별 대수와
//! 일반 에어컨 대비 전력·물·CO₂·비용 절감을 추정한다.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::air_changes::{resolve_air_changes, AirChangeSource};
use super::assumptions::Assumptions;
use super::water::calculate_water_consumption;
use super::{round_half_even, round_to, round_to_int};
use crate::catalog::{AreaKey, CoolerKey, CoolerType, COOLER_TYPES};

/// 계산 입력. 요청마다 새로 만들고 계산 중에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 바닥 면적 [m²]
    pub area: f64,
    /// 천장 높이 [m]
    pub height: f64,
    /// 재실 인원
    pub people: u32,
    pub application_area: Option<AreaKey>,
    /// 외기 건구 온도 [°C]
    pub outdoor_temp: f64,
    /// 상대습도 [%]
    pub humidity: f64,
    pub manual_air_changes: bool,
    /// 수동 환기 횟수 [1/h]. `manual_air_changes`일 때만 사용한다.
    pub custom_air_changes: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            area: 0.0,
            height: 3.0,
            people: 0,
            application_area: None,
            outdoor_temp: 35.0,
            humidity: 40.0,
            manual_air_changes: false,
            custom_air_changes: 15.0,
        }
    }
}

impl CalculationInput {
    /// 면적만 지정하고 나머지는 기본값을 쓴다.
    pub fn with_area(area: f64) -> Self {
        Self {
            area,
            ..Self::default()
        }
    }
}

/// 외부(JSON/CLI) 경계에서 받는 입력. 적용 분야는 문자열 코드로 받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    pub area: f64,
    pub height: f64,
    pub people: u32,
    pub application_area: Option<String>,
    pub outdoor_temp: f64,
    pub humidity: f64,
    pub manual_air_changes: bool,
    pub custom_air_changes: f64,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        let base = CalculationInput::default();
        Self {
            area: base.area,
            height: base.height,
            people: base.people,
            application_area: None,
            outdoor_temp: base.outdoor_temp,
            humidity: base.humidity,
            manual_air_changes: base.manual_air_changes,
            custom_air_changes: base.custom_air_changes,
        }
    }
}

impl CalculationRequest {
    /// 계산 입력으로 변환한다. 알 수 없는 적용 분야 코드는 기본 환기 횟수로 넘어가도록 None 처리한다.
    pub fn into_input(self) -> CalculationInput {
        let application_area = self
            .application_area
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .and_then(|code| {
                let key = AreaKey::from_code(code);
                if key.is_none() {
                    warn!(code, "unknown application area, falling back to default air changes");
                }
                key
            });
        CalculationInput {
            area: self.area,
            height: self.height,
            people: self.people,
            application_area,
            outdoor_temp: self.outdoor_temp,
            humidity: self.humidity,
            manual_air_changes: self.manual_air_changes,
            custom_air_changes: self.custom_air_changes,
        }
    }
}

/// 모델별 선정 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolerOption {
    pub key: CoolerKey,
    pub name: String,
    pub model: String,
    /// 대당 풍량 [m³/h]
    pub capacity: f64,
    /// 대당 소비전력 [kW]
    pub power: f64,
    pub required_units: u32,
    /// 총 소비전력 [kW], 소수 1자리
    pub total_power: f64,
    /// 총 풍량 [m³/h]
    pub total_capacity: f64,
    /// 필요 풍량 / 총 풍량 [%], 최대 100
    pub efficiency: i64,
}

/// 계산 결과. 표시용 반올림이 이미 적용되어 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 냉방 부하 [kW]
    pub total_load: f64,
    pub air_changes: f64,
    pub air_change_source: AirChangeSource,
    /// 필요 총 풍량 [m³/h]
    pub required_airflow: i64,
    /// 일반 에어컨 소비전력 [kW]
    pub conventional_power_kw: f64,
    /// 전력 절감률 [%]
    pub power_savings: i64,
    /// 물 소비량 [L/h]
    pub water_consumption: f64,
    /// CO₂ 절감량 [ton/시즌]
    pub co2_savings: f64,
    pub conventional_co2: f64,
    pub evaporative_co2: f64,
    /// 일반 에어컨 전기 요금 [₺/시즌]
    pub annual_electricity_cost: i64,
    /// 증발식 냉각기 전기 요금 [₺/시즌]
    pub evaporative_electricity_cost: i64,
    /// 증발식 냉각기 물 요금 [₺/시즌]
    pub annual_water_cost: i64,
    pub total_evaporative_cost: i64,
    pub annual_savings: i64,
    pub cooler_options: Vec<CoolerOption>,
    pub recommended_option: CoolerOption,
}

/// 기본 가정값으로 계산한다.
pub fn calculate_cooling(input: &CalculationInput) -> CalculationResult {
    calculate_cooling_with(input, &Assumptions::default())
}

/// 주어진 가정값으로 계산한다. 어떤 입력에도 오류를 내지 않는 순수 함수다.
pub fn calculate_cooling_with(input: &CalculationInput, a: &Assumptions) -> CalculationResult {
    let air_changes = resolve_air_changes(
        input.manual_air_changes,
        input.custom_air_changes,
        input.application_area,
        a.default_air_changes,
    );

    let volume = input.area * input.height;
    let base_airflow = volume * air_changes.value;
    let people_airflow = f64::from(input.people) * a.airflow_per_person;
    let total_airflow = base_airflow + people_airflow;

    let cooling_load = input.area * a.cooling_load_per_m2;
    let water_consumption =
        calculate_water_consumption(input.outdoor_temp, input.humidity, total_airflow);
    let conventional_power_kw = cooling_load / a.cop;

    let options = COOLER_TYPES.map(|cooler| size_cooler(&cooler, total_airflow));
    let recommended = recommend(&options, a.preferred_cooler)
        .unwrap_or(&options[0])
        .clone();

    let evaporative_power_kw = recommended.total_power;
    let power_difference_kw = conventional_power_kw - evaporative_power_kw;
    let power_savings = if conventional_power_kw > 0.0 {
        round_to_int(power_difference_kw / conventional_power_kw * 100.0)
    } else {
        0
    };

    let hours = a.operating_hours();
    let conventional_co2 = conventional_power_kw * hours * a.carbon_factor / 1000.0;
    let evaporative_co2 = evaporative_power_kw * hours * a.carbon_factor / 1000.0;
    let co2_savings = conventional_co2 - evaporative_co2;

    let conventional_electricity_cost = conventional_power_kw * hours * a.electricity_rate;
    let evaporative_electricity_cost = evaporative_power_kw * hours * a.electricity_rate;
    let water_cost = (water_consumption * hours / 1000.0) * a.water_rate_per_ton;
    let total_evaporative_cost = evaporative_electricity_cost + water_cost;
    let annual_savings = conventional_electricity_cost - total_evaporative_cost;

    debug!(
        volume,
        air_changes = air_changes.value,
        total_airflow,
        cooling_load,
        water_consumption,
        recommended = recommended.key.code(),
        "cooling calculation finished"
    );

    CalculationResult {
        total_load: round_to(cooling_load, 1),
        air_changes: air_changes.value,
        air_change_source: air_changes.source,
        required_airflow: round_to_int(total_airflow),
        conventional_power_kw: round_to(conventional_power_kw, 1),
        power_savings,
        water_consumption: round_to(water_consumption, 1),
        co2_savings: round_to(co2_savings, 1),
        conventional_co2: round_to(conventional_co2, 1),
        evaporative_co2: round_to(evaporative_co2, 1),
        annual_electricity_cost: round_to_int(conventional_electricity_cost),
        evaporative_electricity_cost: round_to_int(evaporative_electricity_cost),
        annual_water_cost: round_to_int(water_cost),
        total_evaporative_cost: round_to_int(total_evaporative_cost),
        annual_savings: round_to_int(annual_savings),
        cooler_options: options.to_vec(),
        recommended_option: recommended,
    }
}

/// 필요 풍량에 맞춰 한 모델의 대수/총 용량/효율을 구한다.
/// 반올림이므로 총 용량이 필요 풍량보다 작을 수 있다.
pub fn size_cooler(cooler: &CoolerType, total_airflow: f64) -> CoolerOption {
    let units = round_half_even(total_airflow / cooler.capacity_m3h).max(1.0) as u32;
    let total_capacity = f64::from(units) * cooler.capacity_m3h;
    let total_power = f64::from(units) * cooler.power_kw;
    let efficiency = round_to_int(total_airflow / total_capacity * 100.0).min(100);
    CoolerOption {
        key: cooler.key,
        name: cooler.name.to_string(),
        model: cooler.model.to_string(),
        capacity: cooler.capacity_m3h,
        power: cooler.power_kw,
        required_units: units,
        total_power: round_to(total_power, 1),
        total_capacity,
        efficiency,
    }
}

/// 선호 모델을 찾고, 없으면 카탈로그 순서상 첫 옵션을 고른다.
pub fn recommend(options: &[CoolerOption], preferred: CoolerKey) -> Option<&CoolerOption> {
    options
        .iter()
        .find(|opt| opt.key == preferred)
        .or_else(|| options.first())
}
