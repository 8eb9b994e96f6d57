//! 증발식 냉각 계산 코어를 모아둔다.
//! 물 소비량 테이블, 환기 횟수 결정, 용량/경제성 계산으로 구성한다.

pub mod air_changes;
pub mod assumptions;
pub mod calculator;
pub mod water;

pub use air_changes::{resolve_air_changes, AirChangeSource, ResolvedAirChanges};
pub use assumptions::Assumptions;
pub use calculator::{
    calculate_cooling, calculate_cooling_with, recommend, size_cooler, CalculationInput,
    CalculationRequest, CalculationResult, CoolerOption,
};
pub use water::calculate_water_consumption;

/// 짝수 반올림(0.5는 가까운 짝수로). 결과 수치를 기존 보고서 값과 맞추기 위해 모든 반올림에 쓴다.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// 소수 `digits`자리로 짝수 반올림한다.
/// `value * 10^digits`를 거치지 않고 저장된 2진 값 그대로를 10진 전개해서 자른다.
/// 1.05(실제로는 1.0500000000000000444)는 1.1이 되고, 22.95(실제로는 22.949999...)는 22.9가 된다.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// 정수로 짝수 반올림한다. 범위를 넘는 값은 포화된다.
pub fn round_to_int(value: f64) -> i64 {
    round_half_even(value) as i64
}
