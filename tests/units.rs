//! 입력 단위 환산 테스트.
use approx::assert_abs_diff_eq;
use rstest::rstest;

use fes_cooling_calculator::cooling::{calculate_cooling, CalculationRequest};
use fes_cooling_calculator::units::{
    convert_area, convert_length, convert_temperature, AreaUnit, InputUnits, LengthUnit,
    TemperatureUnit,
};

#[rstest]
#[case(95.0, TemperatureUnit::Fahrenheit, 35.0)]
#[case(308.15, TemperatureUnit::Kelvin, 35.0)]
#[case(40.0, TemperatureUnit::Celsius, 40.0)]
fn temperature_to_celsius(#[case] value: f64, #[case] unit: TemperatureUnit, #[case] c: f64) {
    assert_abs_diff_eq!(
        convert_temperature(value, unit, TemperatureUnit::Celsius),
        c,
        epsilon = 1e-9
    );
}

#[test]
fn length_and_area_factors() {
    assert_abs_diff_eq!(
        convert_length(10.0, LengthUnit::Foot, LengthUnit::Meter),
        3.048,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        convert_area(1000.0, AreaUnit::SquareFoot, AreaUnit::SquareMeter),
        92.903,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        convert_area(92.903, AreaUnit::SquareMeter, AreaUnit::SquareFoot),
        1000.0,
        epsilon = 1e-9
    );
}

#[rstest]
#[case("C", Some(TemperatureUnit::Celsius))]
#[case("°F", Some(TemperatureUnit::Fahrenheit))]
#[case("kelvin", Some(TemperatureUnit::Kelvin))]
#[case("R", None)]
fn temperature_symbols(#[case] s: &str, #[case] expected: Option<TemperatureUnit>) {
    assert_eq!(TemperatureUnit::from_symbol(s), expected);
}

#[test]
fn area_and_length_symbols() {
    assert_eq!(AreaUnit::from_symbol("sqft"), Some(AreaUnit::SquareFoot));
    assert_eq!(AreaUnit::from_symbol("m²"), Some(AreaUnit::SquareMeter));
    assert_eq!(LengthUnit::from_symbol("feet"), Some(LengthUnit::Foot));
    assert_eq!(LengthUnit::from_symbol("yd"), None);
}

#[test]
fn si_units_leave_request_untouched() {
    let req = CalculationRequest {
        area: 500.0,
        height: 4.0,
        ..CalculationRequest::default()
    };
    assert_eq!(InputUnits::default().to_si(req.clone()), req);
}

#[test]
fn imperial_request_matches_metric_result() {
    let units = InputUnits {
        temperature: TemperatureUnit::Fahrenheit,
        length: LengthUnit::Foot,
        area: AreaUnit::SquareFoot,
    };
    let imperial = CalculationRequest {
        area: 10_000.0,
        height: 20.0,
        people: 12,
        application_area: Some("warehouses".into()),
        outdoor_temp: 104.0,
        humidity: 30.0,
        ..CalculationRequest::default()
    };
    let si = units.to_si(imperial);
    assert_abs_diff_eq!(si.area, 929.03, epsilon = 1e-9);
    assert_abs_diff_eq!(si.height, 6.096, epsilon = 1e-9);
    assert_abs_diff_eq!(si.outdoor_temp, 40.0, epsilon = 1e-9);
    assert_eq!(si.people, 12);
    assert_eq!(si.humidity, 30.0);

    let r = calculate_cooling(&si.into_input());
    // 929.03 * 6.096 * 6 + 12 * 50
    assert_eq!(r.required_airflow, 34_580);
}
