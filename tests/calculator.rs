use approx::assert_abs_diff_eq;
use rstest::rstest;

use fes_cooling_calculator::{
    catalog::{find_cooler, AreaKey, CoolerKey},
    cooling::{
        calculate_cooling, calculate_cooling_with, recommend, resolve_air_changes, round_to,
        size_cooler, AirChangeSource, Assumptions, CalculationInput, CalculationRequest,
    },
};

fn warehouse_input() -> CalculationInput {
    CalculationInput {
        area: 100.0,
        height: 3.0,
        application_area: Some(AreaKey::Warehouses),
        ..CalculationInput::default()
    }
}

#[test]
fn warehouse_reference_case() {
    let r = calculate_cooling(&warehouse_input());

    assert_eq!(r.air_changes, 6.0);
    assert_eq!(r.air_change_source, AirChangeSource::Catalog(AreaKey::Warehouses));
    assert_eq!(r.required_airflow, 1800);
    assert_abs_diff_eq!(r.total_load, 12.0);
    assert_abs_diff_eq!(r.conventional_power_kw, 4.0);
    assert_abs_diff_eq!(r.water_consumption, 7.6);

    let units: Vec<u32> = r.cooler_options.iter().map(|o| o.required_units).collect();
    assert_eq!(units, vec![1, 1, 1]);
    let eff: Vec<i64> = r.cooler_options.iter().map(|o| o.efficiency).collect();
    assert_eq!(eff, vec![7, 6, 5]);

    assert_eq!(r.recommended_option.key, CoolerKey::Fes30);
    assert_abs_diff_eq!(r.recommended_option.total_power, 3.0);
    assert_eq!(r.power_savings, 25);

    assert_abs_diff_eq!(r.conventional_co2, 1.6);
    assert_abs_diff_eq!(r.evaporative_co2, 1.2);
    assert_abs_diff_eq!(r.co2_savings, 0.4);

    assert_eq!(r.annual_electricity_cost, 5400);
    assert_eq!(r.evaporative_electricity_cost, 4050);
    assert_eq!(r.annual_water_cost, 103);
    assert_eq!(r.total_evaporative_cost, 4153);
    assert_eq!(r.annual_savings, 1247);
}

#[test]
fn manual_air_changes_override_catalog() {
    let input = CalculationInput {
        manual_air_changes: true,
        custom_air_changes: 20.0,
        ..warehouse_input()
    };
    let r = calculate_cooling(&input);
    assert_eq!(r.air_changes, 20.0);
    assert_eq!(r.air_change_source, AirChangeSource::Manual);
    assert_eq!(r.required_airflow, 6000);
}

#[test]
fn manual_value_is_not_range_checked() {
    let resolved = resolve_air_changes(true, -3.0, Some(AreaKey::Factories), 12.0);
    assert_eq!(resolved.value, -3.0);
    assert_eq!(resolved.source, AirChangeSource::Manual);
}

#[rstest]
#[case(Some("warehouses"), 6.0)]
#[case(Some("FACTORIES"), 30.0)]
#[case(Some("  engine_rooms "), 40.0)]
#[case(Some("moon_base"), 12.0)]
#[case(Some(""), 12.0)]
#[case(None, 12.0)]
fn request_area_code_resolution(#[case] code: Option<&str>, #[case] expected: f64) {
    let req = CalculationRequest {
        area: 100.0,
        application_area: code.map(str::to_string),
        ..CalculationRequest::default()
    };
    let r = calculate_cooling(&req.into_input());
    assert_eq!(r.air_changes, expected);
}

#[test]
fn unknown_area_reports_default_source() {
    let req = CalculationRequest {
        area: 100.0,
        application_area: Some("moon_base".into()),
        ..CalculationRequest::default()
    };
    let input = req.into_input();
    assert_eq!(input.application_area, None);
    assert_eq!(calculate_cooling(&input).air_change_source, AirChangeSource::Default);
}

#[test]
fn request_json_uses_defaults_for_missing_fields() {
    let req: CalculationRequest =
        serde_json::from_str(r#"{"area": 250, "application_area": "kitchens"}"#)
            .expect("request json");
    let input = req.into_input();
    assert_eq!(input.area, 250.0);
    assert_eq!(input.height, 3.0);
    assert_eq!(input.outdoor_temp, 35.0);
    assert_eq!(input.humidity, 40.0);
    assert_eq!(input.application_area, Some(AreaKey::Kitchens));
}

#[test]
fn people_add_fresh_air() {
    let input = CalculationInput {
        area: 100.0,
        people: 10,
        ..CalculationInput::default()
    };
    // 100 * 3 * 12 + 10 * 50
    assert_eq!(calculate_cooling(&input).required_airflow, 4100);
}

#[test]
fn zero_area_is_degenerate_but_defined() {
    let r = calculate_cooling(&CalculationInput::with_area(0.0));
    assert_eq!(r.required_airflow, 0);
    assert_eq!(r.total_load, 0.0);
    assert_eq!(r.conventional_power_kw, 0.0);
    assert_eq!(r.power_savings, 0);
    assert_eq!(r.water_consumption, 0.0);
    assert!(r.cooler_options.iter().all(|o| o.required_units == 1 && o.efficiency == 0));
    assert_eq!(r.annual_savings, -4050);
}

#[test]
fn large_hall_caps_efficiency() {
    let input = CalculationInput {
        area: 10_000.0,
        height: 10.0,
        application_area: Some(AreaKey::QualityControl),
        ..CalculationInput::default()
    };
    let r = calculate_cooling(&input);
    assert_eq!(r.required_airflow, 4_000_000);
    let fes30 = &r.recommended_option;
    assert_eq!(fes30.required_units, 133);
    // 반올림 대수라 총 용량이 필요 풍량보다 작을 수 있다
    assert!(fes30.total_capacity < 4_000_000.0);
    assert_eq!(fes30.efficiency, 100);
    assert!(r.cooler_options.iter().all(|o| o.required_units >= 1 && o.efficiency <= 100));
}

#[test]
fn unit_count_rounds_half_to_even() {
    let fes30 = find_cooler(CoolerKey::Fes30).expect("fes30");
    assert_eq!(size_cooler(fes30, 75_000.0).required_units, 2); // 2.5
    assert_eq!(size_cooler(fes30, 45_000.0).required_units, 2); // 1.5
    assert_eq!(size_cooler(fes30, 10_000.0).required_units, 1); // 0.33 -> max 1
    let opt = size_cooler(fes30, 75_000.0);
    assert_abs_diff_eq!(opt.total_capacity, 60_000.0);
    assert_abs_diff_eq!(opt.total_power, 6.0);
    assert_eq!(opt.efficiency, 100);
}

#[test]
fn recommend_falls_back_to_first_option() {
    let airflow = 50_000.0;
    let options: Vec<_> = [CoolerKey::Fes25, CoolerKey::Fes35Plug]
        .into_iter()
        .filter_map(find_cooler)
        .map(|c| size_cooler(c, airflow))
        .collect();
    let picked = recommend(&options, CoolerKey::Fes30).expect("fallback");
    assert_eq!(picked.key, CoolerKey::Fes25);
    assert!(recommend(&[], CoolerKey::Fes30).is_none());
}

#[test]
fn preferred_cooler_is_configurable() {
    let a = Assumptions {
        preferred_cooler: CoolerKey::Fes25,
        ..Assumptions::default()
    };
    let r = calculate_cooling_with(&warehouse_input(), &a);
    assert_eq!(r.recommended_option.key, CoolerKey::Fes25);
    assert_abs_diff_eq!(r.recommended_option.total_power, 2.2);
    // (4.0 - 2.2) / 4.0 = 45 %
    assert_eq!(r.power_savings, 45);
}

#[test]
fn options_follow_catalog_order() {
    let r = calculate_cooling(&warehouse_input());
    let keys: Vec<_> = r.cooler_options.iter().map(|o| o.key).collect();
    assert_eq!(keys, vec![CoolerKey::Fes25, CoolerKey::Fes30, CoolerKey::Fes35Plug]);
    assert!(r.cooler_options.contains(&r.recommended_option));
}

#[test]
fn calculation_is_repeatable() {
    let input = CalculationInput {
        area: 812.5,
        height: 7.2,
        people: 37,
        application_area: Some(AreaKey::PlasticInjection),
        outdoor_temp: 41.3,
        humidity: 33.0,
        ..CalculationInput::default()
    };
    assert_eq!(calculate_cooling(&input), calculate_cooling(&input));
}

#[rstest]
#[case(0.0, 3.0, 0)]
#[case(50.0, 2.5, 4)]
#[case(2_500.0, 8.0, 120)]
#[case(40_000.0, 12.0, 900)]
fn savings_bounded_and_mid_model_recommended(
    #[case] area: f64,
    #[case] height: f64,
    #[case] people: u32,
) {
    let input = CalculationInput {
        area,
        height,
        people,
        application_area: Some(AreaKey::MetalCasting),
        outdoor_temp: 44.0,
        humidity: 25.0,
        ..CalculationInput::default()
    };
    let r = calculate_cooling(&input);
    assert!(r.power_savings <= 100);
    assert_eq!(r.recommended_option.key, CoolerKey::Fes30);
    if r.conventional_power_kw == 0.0 {
        assert_eq!(r.power_savings, 0);
    }
}

// 저장된 2진 값 기준으로 반올림한다: 1.05는 1.0500000000000000444, 22.95는 22.949999...
#[rstest]
#[case(8.75 * 0.12, 1, 1.1)]
#[case(16.25 * 0.12 / 3.0, 1, 0.7)]
#[case(4.5 * 5.10, 1, 22.9)]
#[case(2.675, 2, 2.67)]
#[case(7.614, 1, 7.6)]
#[case(1234.0, 1, 1234.0)]
fn one_decimal_rounding_uses_stored_value(
    #[case] value: f64,
    #[case] digits: usize,
    #[case] expected: f64,
) {
    assert_eq!(round_to(value, digits), expected);
}

#[test]
fn near_tie_load_rounds_up() {
    let r = calculate_cooling(&CalculationInput::with_area(8.75));
    assert_eq!(r.total_load, 1.1);
}

#[test]
fn near_tie_conventional_power_rounds_up() {
    let r = calculate_cooling(&CalculationInput::with_area(16.25));
    assert_eq!(r.conventional_power_kw, 0.7);
}

#[test]
fn near_tie_water_rounds_down() {
    // 75 * 3 * 20 = 4500 m³/h, 38 °C -> 40 열, 33 % -> 35 % 행 (5.10)
    let input = CalculationInput {
        area: 75.0,
        application_area: Some(AreaKey::Kitchens),
        outdoor_temp: 38.0,
        humidity: 33.0,
        ..CalculationInput::default()
    };
    let r = calculate_cooling(&input);
    assert_eq!(r.required_airflow, 4500);
    assert_eq!(r.water_consumption, 22.9);
}

#[test]
fn operating_hours_follow_season_and_daily_hours() {
    assert_eq!(Assumptions::default().operating_hours(), 900.0);
    let a = Assumptions {
        season_months: 4,
        ..Assumptions::default()
    };
    assert_eq!(a.operating_hours(), 720.0);
    let r = calculate_cooling_with(&warehouse_input(), &a);
    assert_eq!(r.annual_electricity_cost, 4320);
    assert_eq!(r.evaporative_electricity_cost, 3240);
}
