//! 외기 온도/상대습도별 증발 물 소비량 테이블 (1000 m³/h당 L/h).
//! 보간하지 않고 가장 가까운 칸으로 스냅한 뒤 조회한다.

use super::round_half_even;

/// 테이블 온도 열 [°C]
pub const TEMPERATURE_BUCKETS: [f64; 3] = [35.0, 40.0, 45.0];
/// 테이블 습도 행 [%] (15~70, 5 간격)
pub const HUMIDITY_BUCKETS: [f64; 12] = [
    15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
];
/// 칸을 찾지 못했을 때의 물 소비율 [L/h per 1000 m³/h]
pub const DEFAULT_WATER_RATE: f64 = 4.5;

const HUMIDITY_MIN: f64 = 15.0;
const HUMIDITY_MAX: f64 = 70.0;

static WATER_TABLE: [[f64; 12]; 3] = [
    [6.59, 6.08, 5.58, 5.12, 4.67, 4.23, 3.82, 3.41, 3.02, 2.62, 2.26, 1.92],
    [7.29, 6.69, 6.14, 5.61, 5.10, 4.61, 4.16, 3.70, 3.29, 2.86, 2.47, 2.09],
    [7.98, 7.31, 6.68, 6.10, 5.53, 5.00, 4.48, 4.00, 3.53, 3.09, 2.65, 2.24],
];

/// 온도를 테이블 열로 올림 스냅한다. 45 °C 초과도 45 열을 쓴다.
pub fn temperature_bucket(temp_c: f64) -> f64 {
    if temp_c <= 35.0 {
        35.0
    } else if temp_c <= 40.0 {
        40.0
    } else {
        45.0
    }
}

/// 습도를 5 단위로 반올림(짝수 반올림)한 뒤 15~70 범위로 제한한다.
pub fn humidity_bucket(humidity_pct: f64) -> f64 {
    let snapped = round_half_even(humidity_pct / 5.0) * 5.0;
    snapped.clamp(HUMIDITY_MIN, HUMIDITY_MAX)
}

/// 스냅된 칸의 값을 찾는다. 테이블에 없는 칸이면 None.
pub fn lookup_rate(temp_bucket: f64, humidity_bucket: f64) -> Option<f64> {
    let col = TEMPERATURE_BUCKETS.iter().position(|t| *t == temp_bucket)?;
    let row = HUMIDITY_BUCKETS.iter().position(|h| *h == humidity_bucket)?;
    Some(WATER_TABLE[col][row])
}

/// 1000 m³/h당 물 소비율 [L/h]. 범위를 벗어난 입력은 조용히 스냅/클램프한다.
pub fn water_rate_per_1000(temp_c: f64, humidity_pct: f64) -> f64 {
    lookup_rate(temperature_bucket(temp_c), humidity_bucket(humidity_pct))
        .unwrap_or(DEFAULT_WATER_RATE)
}

/// 총 풍량에 대한 시간당 물 소비량 [L/h]을 계산한다.
pub fn calculate_water_consumption(temp_c: f64, humidity_pct: f64, airflow_m3h: f64) -> f64 {
    (airflow_m3h / 1000.0) * water_rate_per_1000(temp_c, humidity_pct)
}
