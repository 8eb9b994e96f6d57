//! 물 소비량 테이블 스냅/조회 회귀 테스트.
use approx::assert_abs_diff_eq;
use rstest::rstest;

use fes_cooling_calculator::cooling::water::{
    calculate_water_consumption, humidity_bucket, lookup_rate, temperature_bucket,
    water_rate_per_1000, DEFAULT_WATER_RATE,
};

#[rstest]
#[case(20.0, 35.0)]
#[case(35.0, 35.0)]
#[case(35.1, 40.0)]
#[case(40.0, 40.0)]
#[case(42.0, 45.0)]
#[case(50.0, 45.0)]
fn temperature_snaps_up_to_column(#[case] temp: f64, #[case] expected: f64) {
    assert_eq!(temperature_bucket(temp), expected);
}

#[rstest]
#[case(12.0, 15.0)]
#[case(73.0, 70.0)]
#[case(42.5, 40.0)] // 8.5 -> 8
#[case(47.5, 50.0)] // 9.5 -> 10
#[case(37.5, 40.0)]
#[case(41.0, 40.0)]
#[case(0.0, 15.0)]
#[case(100.0, 70.0)]
fn humidity_rounds_half_even_and_clamps(#[case] humidity: f64, #[case] expected: f64) {
    assert_eq!(humidity_bucket(humidity), expected);
}

#[rstest]
#[case(35.0, 40.0, 4.23)]
#[case(40.0, 40.0, 4.61)]
#[case(45.0, 15.0, 7.98)]
#[case(35.0, 70.0, 1.92)]
#[case(40.0, 55.0, 3.29)]
#[case(45.0, 70.0, 2.24)]
fn table_cells(#[case] temp: f64, #[case] humidity: f64, #[case] expected: f64) {
    assert_abs_diff_eq!(water_rate_per_1000(temp, humidity), expected, epsilon = 1e-12);
}

#[test]
fn unsnapped_cell_has_no_rate() {
    assert_eq!(lookup_rate(37.0, 40.0), None);
    assert_eq!(lookup_rate(35.0, 42.0), None);
    assert_eq!(lookup_rate(35.0, 40.0), Some(4.23));
    assert_abs_diff_eq!(DEFAULT_WATER_RATE, 4.5);
}

#[test]
fn consumption_scales_with_airflow() {
    assert_abs_diff_eq!(calculate_water_consumption(35.0, 40.0, 1000.0), 4.23, epsilon = 1e-9);
    assert_abs_diff_eq!(calculate_water_consumption(40.0, 40.0, 1000.0), 4.61, epsilon = 1e-9);
    // 50 °C / 10 % -> 45 열, 15 % 행
    assert_abs_diff_eq!(calculate_water_consumption(50.0, 10.0, 2000.0), 15.96, epsilon = 1e-9);
    assert_eq!(calculate_water_consumption(35.0, 40.0, 0.0), 0.0);
}

#[test]
fn drier_and_hotter_air_uses_more_water() {
    let dry = water_rate_per_1000(40.0, 20.0);
    let humid = water_rate_per_1000(40.0, 60.0);
    assert!(dry > humid, "dry={dry} humid={humid}");
    assert!(water_rate_per_1000(45.0, 40.0) > water_rate_per_1000(35.0, 40.0));
}
