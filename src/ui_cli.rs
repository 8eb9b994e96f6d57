use std::io::{self, Write};
use std::path::Path;

use crate::app::{run_calculation, AppError};
use crate::catalog::{cooler_types, find_area_by_code, grouped_areas};
use crate::config::Config;
use crate::cooling::{CalculationRequest, CalculationResult};
use crate::i18n::{keys, Translator};
use crate::report::{save_report, ProjectInfo, Report};
use crate::units::{AreaUnit, LengthUnit, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Areas,
    Coolers,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_AREAS,
        keys::MAIN_MENU_COOLERS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Areas),
            "3" => return Ok(MenuChoice::Coolers),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 새 계산 메뉴를 처리한다. 입력은 설정의 단위로 받는다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    let defaults = CalculationRequest::default();
    let u = &cfg.units;

    let area = read_f64(tr, &format!("{} [{}]: ", tr.t(keys::PROMPT_AREA), u.area.symbol()))?;
    let height = read_f64_or(
        tr,
        &format!("{} [{}]", tr.t(keys::PROMPT_HEIGHT), u.length.symbol()),
        defaults.height,
    )?;
    let people = read_f64_or(tr, &tr.t(keys::PROMPT_PEOPLE), 0.0)?.max(0.0) as u32;
    let application_area = read_area_code(tr)?;
    let outdoor_temp = read_f64_or(
        tr,
        &format!("{} [{}]", tr.t(keys::PROMPT_OUTDOOR_TEMP), u.temperature.symbol()),
        defaults.outdoor_temp,
    )?;
    let humidity = read_f64_or(tr, &tr.t(keys::PROMPT_HUMIDITY), defaults.humidity)?;
    let manual_air_changes = read_yes_no(&tr.t(keys::PROMPT_MANUAL_ACH))?;
    let custom_air_changes = if manual_air_changes {
        read_f64_or(tr, &tr.t(keys::PROMPT_CUSTOM_ACH), defaults.custom_air_changes)?
    } else {
        defaults.custom_air_changes
    };

    let request = CalculationRequest {
        area,
        height,
        people,
        application_area,
        outdoor_temp,
        humidity,
        manual_air_changes,
        custom_air_changes,
    };
    let (input, result) = run_calculation(request, cfg);
    print_result(tr, &result, &cfg.report.currency_symbol);

    let path = read_line(&tr.t(keys::PROMPT_SAVE_REPORT))?;
    let path = path.trim();
    if !path.is_empty() {
        let project = read_project_info(tr)?;
        let report = Report::new(&project, &input, &result, &cfg.assumptions, &cfg.report);
        let saved = save_report(&report, Path::new(path), cfg.report.format)?;
        println!("{} {}", tr.t(keys::REPORT_SAVED), saved.display());
    }
    Ok(())
}

fn read_area_code(tr: &Translator) -> Result<Option<String>, AppError> {
    loop {
        let code = read_line(&tr.t(keys::PROMPT_APPLICATION_AREA))?;
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }
        if code == "?" {
            print_areas(tr);
            continue;
        }
        if find_area_by_code(code).is_none() {
            println!("{}", tr.t(keys::UNKNOWN_AREA));
        }
        return Ok(Some(code.to_string()));
    }
}

fn read_project_info(tr: &Translator) -> Result<ProjectInfo, AppError> {
    let field = |key: &str| -> Result<Option<String>, AppError> {
        let v = read_line(&tr.t(key))?;
        let v = v.trim();
        Ok((!v.is_empty()).then(|| v.to_string()))
    };
    Ok(ProjectInfo {
        project_name: field(keys::PROMPT_PROJECT_NAME)?,
        company_name: field(keys::PROMPT_COMPANY_NAME)?,
        city: field(keys::PROMPT_CITY)?,
        phone: field(keys::PROMPT_PHONE)?,
        email: field(keys::PROMPT_EMAIL)?,
    })
}

/// 계산 결과를 표 형태로 출력한다.
pub fn print_result(tr: &Translator, r: &CalculationResult, currency: &str) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("{} {} m³/h", tr.t(keys::RESULT_AIRFLOW), r.required_airflow);
    println!("{} {:.1} kW", tr.t(keys::RESULT_LOAD), r.total_load);
    println!(
        "{} {} ACH ({:?})",
        tr.t(keys::RESULT_AIR_CHANGES),
        r.air_changes,
        r.air_change_source
    );
    println!("{}", tr.t(keys::RESULT_OPTIONS));
    for opt in &r.cooler_options {
        let mark = if opt.key == r.recommended_option.key {
            format!("  <- {}", tr.t(keys::RESULT_RECOMMENDED))
        } else {
            String::new()
        };
        println!(
            "  {:<14} x{:<3} {:>9.0} m³/h {:>6.1} kW {:>4}%{mark}",
            opt.model, opt.required_units, opt.total_capacity, opt.total_power, opt.efficiency
        );
    }
    println!(
        "{} {:.1} kW / {:.1} kW",
        tr.t(keys::RESULT_POWER),
        r.conventional_power_kw,
        r.recommended_option.total_power
    );
    println!("{} {}%", tr.t(keys::RESULT_POWER_SAVINGS), r.power_savings);
    println!("{} {:.1} L/h", tr.t(keys::RESULT_WATER), r.water_consumption);
    println!(
        "{} {:.1} / {:.1} / {:.1} t",
        tr.t(keys::RESULT_CO2),
        r.conventional_co2,
        r.evaporative_co2,
        r.co2_savings
    );
    println!(
        "{} {} / {} / {} {currency}",
        tr.t(keys::RESULT_COSTS),
        r.annual_electricity_cost,
        r.evaporative_electricity_cost,
        r.annual_water_cost
    );
    println!("{} {} {currency}", tr.t(keys::RESULT_SAVINGS), r.annual_savings);
}

/// 적용 분야 목록을 카테고리별로 출력한다.
pub fn print_areas(tr: &Translator) {
    println!("{}", tr.t(keys::AREAS_HEADING));
    for (category, areas) in grouped_areas() {
        println!("{}", category.label());
        for a in areas {
            println!("  {:<22} {:<38} {:>4}", a.code, a.name, a.air_changes);
        }
    }
}

pub fn print_coolers(tr: &Translator) {
    println!("{}", tr.t(keys::COOLERS_HEADING));
    for c in cooler_types() {
        println!(
            "  {:<10} {:<14} {:>7.0} m³/h {:>5.1} kW",
            c.key.code(),
            c.model,
            c.capacity_m3h,
            c.power_kw
        );
    }
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {} / {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.units.temperature.symbol(),
        cfg.units.length.symbol(),
        cfg.units.area.symbol(),
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => return Ok(false),
        "1" => {
            println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
            pick(tr, &mut cfg.units.temperature, |s| match s {
                "1" => Some(TemperatureUnit::Celsius),
                "2" => Some(TemperatureUnit::Fahrenheit),
                "3" => Some(TemperatureUnit::Kelvin),
                _ => None,
            })?
        }
        "2" => {
            println!("{}", tr.t(keys::LENGTH_UNIT_OPTIONS));
            pick(tr, &mut cfg.units.length, |s| match s {
                "1" => Some(LengthUnit::Meter),
                "2" => Some(LengthUnit::Foot),
                _ => None,
            })?
        }
        "3" => {
            println!("{}", tr.t(keys::AREA_UNIT_OPTIONS));
            pick(tr, &mut cfg.units.area, |s| match s {
                "1" => Some(AreaUnit::SquareMeter),
                "2" => Some(AreaUnit::SquareFoot),
                _ => None,
            })?
        }
        "4" => {
            println!("{}", tr.t(keys::LANGUAGE_OPTIONS));
            pick(tr, &mut cfg.language, |s| match s {
                "1" => Some("auto".to_string()),
                "2" => Some("en".to_string()),
                "3" => Some("tr".to_string()),
                _ => None,
            })?
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            false
        }
    };
    Ok(changed)
}

fn pick<T>(
    tr: &Translator,
    slot: &mut T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<bool, AppError> {
    let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
    match parse(sel.trim()) {
        Some(v) => {
            *slot = v;
            Ok(true)
        }
        None => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓴다.
fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    let prompt = format!("{label} ({} {default}): ", tr.t(keys::HINT_DEFAULT));
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(
        s.trim().to_lowercase().as_str(),
        "y" | "yes" | "e" | "evet"
    ))
}
